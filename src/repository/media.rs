use diesel::prelude::*;

use crate::domain::media::{Media, MediaUpdate, NewMedia};
use crate::domain::media_number::{assign_media_number, max_sequence};
use crate::domain::types::{CategoryCode, MediaId};
use crate::models::media::{Media as DbMedia, NewMedia as DbNewMedia};
use crate::repository::{
    DieselRepository, MediaListQuery, MediaReader, MediaWriter, RepositoryError,
    RepositoryResult, like_pattern,
};

impl MediaReader for DieselRepository {
    fn list_media(&self, query: MediaListQuery) -> RepositoryResult<(usize, Vec<Media>)> {
        use crate::schema::media;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = media::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(site_id) = query.site_id {
                items = items.filter(media::site_id.eq(site_id.get()));
            }
            if let Some(category_id) = query.category_id {
                items = items.filter(media::category_id.eq(category_id.get()));
            }
            if let Some(media_type_id) = query.media_type_id {
                items = items.filter(media::media_type_id.eq(media_type_id.get()));
            }
            if let Some(created_by) = query.created_by {
                items = items.filter(media::created_by.eq(created_by.get()));
            }

            if let Some(search) = &query.search {
                let pattern = like_pattern(search);
                items = items.filter(
                    media::title
                        .like(pattern.clone())
                        .or(media::authors.like(pattern.clone()))
                        .or(media::media_number.like(pattern.clone()))
                        .or(media::isbn13.like(pattern)),
                );
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let items = items
            .order(media::media_number.asc())
            .load::<DbMedia>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Media>, _>>()?;

        Ok((total, items))
    }

    fn get_media_by_id(&self, id: MediaId) -> RepositoryResult<Option<Media>> {
        use crate::schema::media;

        let mut conn = self.conn()?;

        let item = media::table
            .find(id.get())
            .first::<DbMedia>(&mut conn)
            .optional()?;

        Ok(item.map(TryInto::try_into).transpose()?)
    }

    fn get_media_by_number(&self, media_number: &str) -> RepositoryResult<Option<Media>> {
        use crate::schema::media;

        let mut conn = self.conn()?;

        let item = media::table
            .filter(media::media_number.eq(media_number))
            .first::<DbMedia>(&mut conn)
            .optional()?;

        Ok(item.map(TryInto::try_into).transpose()?)
    }
}

impl MediaWriter for DieselRepository {
    fn create_media(&self, item: &NewMedia) -> RepositoryResult<Media> {
        use crate::schema::{media, media_categories};

        let mut conn = self.conn()?;

        // IMMEDIATE takes the write lock before the category maximum is read.
        let created = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let code = media_categories::table
                .find(item.category_id.get())
                .select(media_categories::code)
                .first::<String>(conn)
                .optional()?
                .ok_or_else(|| {
                    RepositoryError::ValidationError(format!(
                        "media category {} does not exist",
                        item.category_id
                    ))
                })?;
            let code = CategoryCode::new(code)?;

            let existing = media::table
                .filter(media::category_id.eq(item.category_id.get()))
                .select(media::media_number)
                .load::<String>(conn)?;
            let existing_max = max_sequence(&code, existing.iter().map(String::as_str));

            let media_number =
                assign_media_number(&code, item.legacy_media_number.as_ref(), existing_max);

            let taken = media::table
                .filter(media::media_number.eq(media_number.as_str()))
                .count()
                .get_result::<i64>(conn)?
                > 0;
            if taken {
                return Err(RepositoryError::Conflict(format!(
                    "media number {media_number} is already taken"
                )));
            }

            let row = diesel::insert_into(media::table)
                .values(DbNewMedia::from_domain(item, &media_number))
                .get_result::<DbMedia>(conn)?;

            Ok(row)
        })?;

        Ok(created.try_into()?)
    }

    fn update_media(&self, id: MediaId, update: &MediaUpdate) -> RepositoryResult<usize> {
        use crate::schema::media;

        let mut conn = self.conn()?;

        let affected = diesel::update(media::table.find(id.get()))
            .set((
                (
                    media::title.eq(update.title.as_str()),
                    media::authors.eq(update.authors.as_deref()),
                    media::site_id.eq(update.site_id.get()),
                    media::media_type_id.eq(update.media_type_id.get()),
                    media::isbn13.eq(update.isbn13.as_ref().map(|i| i.as_str())),
                    media::acquisition_date.eq(update.acquisition_date),
                    media::price.eq(update.price.map(f64::from)),
                    media::left_library_date.eq(update.left_library_date),
                ),
                (
                    media::comments.eq(update.comments.as_deref()),
                    media::publisher.eq(update.publisher.as_deref()),
                    media::publishing_date.eq(update.publishing_date),
                    media::short_description.eq(update.short_description.as_deref()),
                    media::media_file.eq(update.media_file.as_deref()),
                    media::updated_at.eq(update.revision.updated_at),
                    media::updated_by.eq(Some(update.revision.updated_by.get())),
                ),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_media(&self, id: MediaId) -> RepositoryResult<usize> {
        use crate::schema::media;

        let mut conn = self.conn()?;

        let affected = diesel::delete(media::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
