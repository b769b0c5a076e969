use diesel::prelude::*;

use crate::domain::library_site::{LibrarySite, LibrarySiteUpdate, NewLibrarySite};
use crate::domain::types::LibrarySiteId;
use crate::models::library_site::{
    LibrarySite as DbLibrarySite, NewLibrarySite as DbNewLibrarySite,
};
use crate::repository::{
    DieselRepository, LibrarySiteListQuery, LibrarySiteReader, LibrarySiteWriter,
    RepositoryResult, like_pattern,
};

impl LibrarySiteReader for DieselRepository {
    fn list_sites(
        &self,
        query: LibrarySiteListQuery,
    ) -> RepositoryResult<(usize, Vec<LibrarySite>)> {
        use crate::schema::library_sites;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = library_sites::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                let pattern = like_pattern(search);
                items = items.filter(
                    library_sites::name
                        .like(pattern.clone())
                        .or(library_sites::description.like(pattern)),
                );
            }

            if let Some(is_active) = query.is_active {
                items = items.filter(library_sites::is_active.eq(is_active));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let items = items
            .order(library_sites::name.asc())
            .load::<DbLibrarySite>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<LibrarySite>, _>>()?;

        Ok((total, items))
    }

    fn get_site_by_id(&self, id: LibrarySiteId) -> RepositoryResult<Option<LibrarySite>> {
        use crate::schema::library_sites;

        let mut conn = self.conn()?;

        let site = library_sites::table
            .find(id.get())
            .first::<DbLibrarySite>(&mut conn)
            .optional()?;

        Ok(site.map(TryInto::try_into).transpose()?)
    }
}

impl LibrarySiteWriter for DieselRepository {
    fn create_site(&self, site: &NewLibrarySite) -> RepositoryResult<LibrarySite> {
        use crate::schema::library_sites;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(library_sites::table)
            .values(DbNewLibrarySite::from(site))
            .get_result::<DbLibrarySite>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_site(
        &self,
        id: LibrarySiteId,
        update: &LibrarySiteUpdate,
    ) -> RepositoryResult<usize> {
        use crate::schema::library_sites;

        let mut conn = self.conn()?;

        let affected = diesel::update(library_sites::table.find(id.get()))
            .set((
                library_sites::name.eq(update.name.as_str()),
                library_sites::description.eq(update.description.as_deref()),
                library_sites::opening_hours.eq(update.opening_hours.as_deref()),
                library_sites::is_active.eq(update.is_active),
                library_sites::updated_at.eq(update.revision.updated_at),
                library_sites::updated_by.eq(Some(update.revision.updated_by.get())),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_site(&self, id: LibrarySiteId) -> RepositoryResult<usize> {
        use crate::schema::library_sites;

        let mut conn = self.conn()?;

        let affected = diesel::delete(library_sites::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
