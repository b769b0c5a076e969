use crate::db::{DbConnection, DbPool};
use crate::domain::borrower::{Borrower, BorrowerUpdate, NewBorrower};
use crate::domain::category::{MediaCategory, MediaCategoryUpdate, NewMediaCategory};
use crate::domain::library_site::{LibrarySite, LibrarySiteUpdate, NewLibrarySite};
use crate::domain::media::{Media, MediaUpdate, NewMedia};
use crate::domain::media_type::{MediaType, MediaTypeUpdate, NewMediaType};
use crate::domain::school_year::SchoolYear;
use crate::domain::types::{
    BorrowerId, LibrarySiteId, MediaCategoryId, MediaId, MediaTypeId, UserId,
};

pub mod borrower;
pub mod category;
pub mod errors;
pub mod library_site;
pub mod media;
pub mod media_type;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between callers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Page selection for list queries; pages start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub(crate) fn offset(&self) -> i64 {
        ((self.page.max(1) - 1) * self.per_page) as i64
    }

    pub(crate) fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// SQL `LIKE` pattern matching `search` anywhere in a column.
pub(crate) fn like_pattern(search: &str) -> String {
    format!("%{}%", search.trim())
}

/// Query parameters for listing media categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryListQuery {
    /// Matches code, name or colour.
    pub search: Option<String>,
    /// Exact colour name filter.
    pub colour: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CategoryListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = Some(colour.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters for listing media types.
#[derive(Debug, Clone, Default)]
pub struct MediaTypeListQuery {
    /// Matches the name.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl MediaTypeListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters for listing library sites.
#[derive(Debug, Clone, Default)]
pub struct LibrarySiteListQuery {
    /// Matches name or description.
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub pagination: Option<Pagination>,
}

impl LibrarySiteListQuery {
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters used when listing or searching media.
#[derive(Debug, Clone, Default)]
pub struct MediaListQuery {
    pub site_id: Option<LibrarySiteId>,
    pub category_id: Option<MediaCategoryId>,
    pub media_type_id: Option<MediaTypeId>,
    pub created_by: Option<UserId>,
    /// Matches title, authors, media number or ISBN.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl MediaListQuery {
    pub fn site(mut self, site_id: LibrarySiteId) -> Self {
        self.site_id = Some(site_id);
        self
    }
    pub fn category(mut self, category_id: MediaCategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn media_type(mut self, media_type_id: MediaTypeId) -> Self {
        self.media_type_id = Some(media_type_id);
        self
    }
    pub fn created_by(mut self, user_id: UserId) -> Self {
        self.created_by = Some(user_id);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Query parameters used when listing or searching borrowers.
#[derive(Debug, Clone, Default)]
pub struct BorrowerListQuery {
    pub inactive: Option<bool>,
    pub borrower_class: Option<String>,
    pub entry_school_year: Option<SchoolYear>,
    /// Matches given name, surname, entry school year or class.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl BorrowerListQuery {
    pub fn inactive(mut self, inactive: bool) -> Self {
        self.inactive = Some(inactive);
        self
    }
    pub fn class(mut self, borrower_class: impl Into<String>) -> Self {
        self.borrower_class = Some(borrower_class.into());
        self
    }
    pub fn entry_school_year(mut self, year: SchoolYear) -> Self {
        self.entry_school_year = Some(year);
        self
    }
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for media categories.
pub trait MediaCategoryReader {
    /// List categories ordered by code.
    fn list_categories(
        &self,
        query: CategoryListQuery,
    ) -> RepositoryResult<(usize, Vec<MediaCategory>)>;
    fn get_category_by_id(&self, id: MediaCategoryId) -> RepositoryResult<Option<MediaCategory>>;
}

/// Write operations for media categories.
pub trait MediaCategoryWriter {
    fn create_category(&self, category: &NewMediaCategory) -> RepositoryResult<MediaCategory>;
    /// Update a category. Changing the code of a category that media
    /// reference fails with [`RepositoryError::Conflict`].
    fn update_category(
        &self,
        id: MediaCategoryId,
        update: &MediaCategoryUpdate,
    ) -> RepositoryResult<usize>;
    fn delete_category(&self, id: MediaCategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for media types.
pub trait MediaTypeReader {
    fn list_media_types(
        &self,
        query: MediaTypeListQuery,
    ) -> RepositoryResult<(usize, Vec<MediaType>)>;
    fn get_media_type_by_id(&self, id: MediaTypeId) -> RepositoryResult<Option<MediaType>>;
}

/// Write operations for media types.
pub trait MediaTypeWriter {
    fn create_media_type(&self, media_type: &NewMediaType) -> RepositoryResult<MediaType>;
    fn update_media_type(
        &self,
        id: MediaTypeId,
        update: &MediaTypeUpdate,
    ) -> RepositoryResult<usize>;
    fn delete_media_type(&self, id: MediaTypeId) -> RepositoryResult<usize>;
}

/// Read-only operations for library sites.
pub trait LibrarySiteReader {
    fn list_sites(
        &self,
        query: LibrarySiteListQuery,
    ) -> RepositoryResult<(usize, Vec<LibrarySite>)>;
    fn get_site_by_id(&self, id: LibrarySiteId) -> RepositoryResult<Option<LibrarySite>>;
}

/// Write operations for library sites.
pub trait LibrarySiteWriter {
    fn create_site(&self, site: &NewLibrarySite) -> RepositoryResult<LibrarySite>;
    fn update_site(&self, id: LibrarySiteId, update: &LibrarySiteUpdate)
    -> RepositoryResult<usize>;
    fn delete_site(&self, id: LibrarySiteId) -> RepositoryResult<usize>;
}

/// Read-only operations for media items.
pub trait MediaReader {
    /// List media matching the supplied query, ordered by media number.
    fn list_media(&self, query: MediaListQuery) -> RepositoryResult<(usize, Vec<Media>)>;
    fn get_media_by_id(&self, id: MediaId) -> RepositoryResult<Option<Media>>;
    fn get_media_by_number(&self, media_number: &str) -> RepositoryResult<Option<Media>>;
}

/// Write operations for media items.
pub trait MediaWriter {
    /// Insert a media item, assigning its media number.
    ///
    /// The category maximum is read and the row written under one exclusive
    /// transaction. A number that is already taken fails with
    /// [`RepositoryError::Conflict`].
    fn create_media(&self, media: &NewMedia) -> RepositoryResult<Media>;
    fn update_media(&self, id: MediaId, update: &MediaUpdate) -> RepositoryResult<usize>;
    fn delete_media(&self, id: MediaId) -> RepositoryResult<usize>;
}

/// Read-only operations for borrowers.
pub trait BorrowerReader {
    /// List borrowers ordered by surname, then given name.
    fn list_borrowers(&self, query: BorrowerListQuery)
    -> RepositoryResult<(usize, Vec<Borrower>)>;
    fn get_borrower_by_id(&self, id: BorrowerId) -> RepositoryResult<Option<Borrower>>;
}

/// Write operations for borrowers.
pub trait BorrowerWriter {
    fn create_borrower(&self, borrower: &NewBorrower) -> RepositoryResult<Borrower>;
    fn update_borrower(&self, id: BorrowerId, update: &BorrowerUpdate) -> RepositoryResult<usize>;
    fn delete_borrower(&self, id: BorrowerId) -> RepositoryResult<usize>;
}
