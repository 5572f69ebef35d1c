//! Page descriptors, sort keys and the paged response envelope.

use serde::Serialize;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Maximum number of items per page.
pub const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Car fields a caller may sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Price,
    Mileage,
    ManufacturedDate,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parse the client-facing (camelCase) field name.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "price" => Ok(Self::Price),
            "mileage" => Ok(Self::Mileage),
            "manufacturedDate" => Ok(Self::ManufacturedDate),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            _ => Err(format!(
                "Invalid sort field '{s}'. Must be one of: id, name, price, mileage, \
                 manufacturedDate, createdAt, updatedAt"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("Invalid sort direction '{s}'. Must be asc or desc")),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Parse a sort specification such as `"price,desc;name"`.
///
/// Keys are separated by `;`, each key is `field[,direction]` and the
/// direction defaults to ascending.
pub fn parse_sort(raw: &str) -> Result<Vec<SortKey>, String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|key| {
            let mut parts = key.splitn(2, ',').map(str::trim);
            let field = SortField::from_str_value(parts.next().unwrap_or_default())?;
            let direction = match parts.next() {
                Some(d) if !d.is_empty() => SortDirection::from_str_value(d)?,
                _ => SortDirection::Asc,
            };
            Ok(SortKey { field, direction })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// A validated page descriptor: zero-based page index, positive size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort: Vec<SortKey>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Build a page request from raw query values.
    ///
    /// The page index is floored at 0 and the size clamped to
    /// `[1, MAX_PAGE_SIZE]`. Only the sort string can fail.
    pub fn from_params(
        page: Option<i64>,
        size: Option<i64>,
        sort: Option<&str>,
    ) -> Result<Self, String> {
        let sort = match sort {
            Some(raw) => parse_sort(raw)?,
            None => Vec::new(),
        };
        Ok(Self {
            page: page.unwrap_or(0).max(0),
            size: size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
            sort,
        })
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

// ---------------------------------------------------------------------------
// Page response
// ---------------------------------------------------------------------------

/// One page of results plus the metadata needed to render a pager.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number_of_elements: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + request.size - 1) / request.size
        };
        let number_of_elements = content.len() as i64;
        Self {
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
            number_of_elements,
            first: request.page == 0,
            last: request.page.saturating_add(1) >= total_pages,
            empty: content.is_empty(),
            content,
        }
    }

    /// Convert every item, keeping the page metadata.
    pub fn try_map<U, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<Page<U>, E> {
        let content = self.content.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(Page {
            content,
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
