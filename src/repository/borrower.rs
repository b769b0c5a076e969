use diesel::prelude::*;

use crate::domain::borrower::{Borrower, BorrowerUpdate, NewBorrower};
use crate::domain::types::BorrowerId;
use crate::models::borrower::{Borrower as DbBorrower, NewBorrower as DbNewBorrower};
use crate::repository::{
    BorrowerListQuery, BorrowerReader, BorrowerWriter, DieselRepository, RepositoryResult,
    like_pattern,
};

impl BorrowerReader for DieselRepository {
    fn list_borrowers(
        &self,
        query: BorrowerListQuery,
    ) -> RepositoryResult<(usize, Vec<Borrower>)> {
        use crate::schema::borrowers;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = borrowers::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(inactive) = query.inactive {
                items = items.filter(borrowers::inactive.eq(inactive));
            }
            if let Some(borrower_class) = &query.borrower_class {
                items = items.filter(borrowers::borrower_class.eq(borrower_class.clone()));
            }
            if let Some(entry_school_year) = query.entry_school_year {
                items = items.filter(borrowers::entry_school_year.eq(entry_school_year.label()));
            }

            if let Some(search) = &query.search {
                let pattern = like_pattern(search);
                items = items.filter(
                    borrowers::given_name
                        .like(pattern.clone())
                        .or(borrowers::surname.like(pattern.clone()))
                        .or(borrowers::entry_school_year.like(pattern.clone()))
                        .or(borrowers::borrower_class.like(pattern)),
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
            .order((borrowers::surname.asc(), borrowers::given_name.asc()))
            .load::<DbBorrower>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Borrower>, _>>()?;

        Ok((total, items))
    }

    fn get_borrower_by_id(&self, id: BorrowerId) -> RepositoryResult<Option<Borrower>> {
        use crate::schema::borrowers;

        let mut conn = self.conn()?;

        let borrower = borrowers::table
            .find(id.get())
            .first::<DbBorrower>(&mut conn)
            .optional()?;

        Ok(borrower.map(TryInto::try_into).transpose()?)
    }
}

impl BorrowerWriter for DieselRepository {
    fn create_borrower(&self, borrower: &NewBorrower) -> RepositoryResult<Borrower> {
        use crate::schema::borrowers;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(borrowers::table)
            .values(DbNewBorrower::from(borrower))
            .get_result::<DbBorrower>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_borrower(&self, id: BorrowerId, update: &BorrowerUpdate) -> RepositoryResult<usize> {
        use crate::schema::borrowers;

        let mut conn = self.conn()?;

        let affected = diesel::update(borrowers::table.find(id.get()))
            .set((
                borrowers::given_name.eq(update.given_name.as_str()),
                borrowers::surname.eq(update.surname.as_str()),
                borrowers::entry_school_year.eq(update.entry_school_year.label()),
                borrowers::initial_grade.eq(update.initial_grade.get()),
                borrowers::borrower_class.eq(update.borrower_class.as_str()),
                borrowers::inactive.eq(update.inactive),
                borrowers::user_id.eq(update.user_id.map(i32::from)),
                borrowers::updated_at.eq(update.revision.updated_at),
                borrowers::updated_by.eq(Some(update.revision.updated_by.get())),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_borrower(&self, id: BorrowerId) -> RepositoryResult<usize> {
        use crate::schema::borrowers;

        let mut conn = self.conn()?;

        let affected = diesel::delete(borrowers::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
