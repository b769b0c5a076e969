use diesel::prelude::*;

use crate::domain::category::{MediaCategory, MediaCategoryUpdate, NewMediaCategory};
use crate::domain::types::MediaCategoryId;
use crate::models::category::{
    MediaCategory as DbMediaCategory, NewMediaCategory as DbNewMediaCategory,
};
use crate::repository::{
    CategoryListQuery, DieselRepository, MediaCategoryReader, MediaCategoryWriter,
    RepositoryError, RepositoryResult, like_pattern,
};

impl MediaCategoryReader for DieselRepository {
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<MediaCategory>)> {
        use crate::schema::media_categories;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = media_categories::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(search) = &query.search {
                let pattern = like_pattern(search);
                items = items.filter(
                    media_categories::code
                        .like(pattern.clone())
                        .or(media_categories::name.like(pattern.clone()))
                        .or(media_categories::colour.like(pattern)),
                );
            }

            if let Some(colour) = &query.colour {
                items = items.filter(media_categories::colour.eq(colour.clone()));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let items = items
            .order(media_categories::code.asc())
            .load::<DbMediaCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<MediaCategory>, _>>()?;

        Ok((total, items))
    }

    fn get_category_by_id(&self, id: MediaCategoryId) -> RepositoryResult<Option<MediaCategory>> {
        use crate::schema::media_categories;

        let mut conn = self.conn()?;

        let category = media_categories::table
            .find(id.get())
            .first::<DbMediaCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }
}

impl MediaCategoryWriter for DieselRepository {
    fn create_category(&self, category: &NewMediaCategory) -> RepositoryResult<MediaCategory> {
        use crate::schema::media_categories;

        let mut conn = self.conn()?;
        let db_category: DbNewMediaCategory = category.clone().into();

        let created = diesel::insert_into(media_categories::table)
            .values(db_category)
            .get_result::<DbMediaCategory>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_category(
        &self,
        id: MediaCategoryId,
        update: &MediaCategoryUpdate,
    ) -> RepositoryResult<usize> {
        use crate::schema::{media, media_categories};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let current_code = media_categories::table
                .find(id.get())
                .select(media_categories::code)
                .first::<String>(conn)?;

            if current_code != update.code.as_str() {
                let referenced = media::table
                    .filter(media::category_id.eq(id.get()))
                    .count()
                    .get_result::<i64>(conn)?;
                if referenced > 0 {
                    return Err(RepositoryError::Conflict(format!(
                        "category code {current_code} is used by {referenced} media"
                    )));
                }
            }

            let affected = diesel::update(media_categories::table.find(id.get()))
                .set((
                    media_categories::code.eq(update.code.as_str()),
                    media_categories::name.eq(update.name.as_str()),
                    media_categories::colour.eq(update.colour.as_str()),
                    media_categories::colour_code.eq(update.colour_code.as_str()),
                    media_categories::description.eq(update.description.as_deref()),
                    media_categories::updated_at.eq(update.revision.updated_at),
                    media_categories::updated_by.eq(Some(update.revision.updated_by.get())),
                ))
                .execute(conn)?;

            Ok(affected)
        })
    }

    fn delete_category(&self, id: MediaCategoryId) -> RepositoryResult<usize> {
        use crate::schema::media_categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(media_categories::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
