use chrono::Utc;
use diesel::prelude::*;

use crate::{
    domain::lead::{Lead, NewLead},
    models::lead::{Lead as DbLead, NewLead as DbNewLead},
    repository::{DieselRepository, LeadReader, LeadWriter, errors::RepositoryResult},
};

impl LeadReader for DieselRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;

        let items = leads::table
            .order((leads::created_at.desc(), leads::id.desc()))
            .load::<DbLead>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Lead>>();

        Ok(items)
    }
}

impl LeadWriter for DieselRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Option<Lead>> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let insertable = DbNewLead::stamped(new_lead, Utc::now().naive_utc());

        let created = diesel::insert_into(leads::table)
            .values(&insertable)
            .get_result::<DbLead>(&mut conn)?;

        Ok(Some(created.into()))
    }

    fn clear_leads(&self) -> RepositoryResult<()> {
        use crate::schema::leads;

        let mut conn = self.conn()?;
        let removed = diesel::delete(leads::table).execute(&mut conn)?;
        log::info!("Deleted {removed} leads");

        Ok(())
    }
}
