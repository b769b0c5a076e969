use diesel::prelude::*;

use crate::domain::media_type::{MediaType, MediaTypeUpdate, NewMediaType};
use crate::domain::types::MediaTypeId;
use crate::models::media_type::{MediaType as DbMediaType, NewMediaType as DbNewMediaType};
use crate::repository::{
    DieselRepository, MediaTypeListQuery, MediaTypeReader, MediaTypeWriter, RepositoryResult,
    like_pattern,
};

impl MediaTypeReader for DieselRepository {
    fn list_media_types(
        &self,
        query: MediaTypeListQuery,
    ) -> RepositoryResult<(usize, Vec<MediaType>)> {
        use crate::schema::media_types;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = media_types::table.into_boxed::<diesel::sqlite::Sqlite>();
            if let Some(search) = &query.search {
                items = items.filter(media_types::name.like(like_pattern(search)));
            }
            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let items = items
            .order(media_types::name.asc())
            .load::<DbMediaType>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<MediaType>, _>>()?;

        Ok((total, items))
    }

    fn get_media_type_by_id(&self, id: MediaTypeId) -> RepositoryResult<Option<MediaType>> {
        use crate::schema::media_types;

        let mut conn = self.conn()?;

        let media_type = media_types::table
            .find(id.get())
            .first::<DbMediaType>(&mut conn)
            .optional()?;

        Ok(media_type.map(TryInto::try_into).transpose()?)
    }
}

impl MediaTypeWriter for DieselRepository {
    fn create_media_type(&self, media_type: &NewMediaType) -> RepositoryResult<MediaType> {
        use crate::schema::media_types;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(media_types::table)
            .values(DbNewMediaType::from(media_type))
            .get_result::<DbMediaType>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_media_type(
        &self,
        id: MediaTypeId,
        update: &MediaTypeUpdate,
    ) -> RepositoryResult<usize> {
        use crate::schema::media_types;

        let mut conn = self.conn()?;

        let affected = diesel::update(media_types::table.find(id.get()))
            .set((
                media_types::name.eq(update.name.as_str()),
                media_types::updated_at.eq(update.revision.updated_at),
                media_types::updated_by.eq(Some(update.revision.updated_by.get())),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_media_type(&self, id: MediaTypeId) -> RepositoryResult<usize> {
        use crate::schema::media_types;

        let mut conn = self.conn()?;

        let affected = diesel::delete(media_types::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
