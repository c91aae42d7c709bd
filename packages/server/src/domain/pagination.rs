//! Sorting and paging of room listings.

use std::cmp::Ordering;

use super::entity::Room;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page a caller may request
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Room attribute a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    Id,
    RoomNumber,
    Name,
    Capacity,
}

impl SortProperty {
    /// Resolve a property from its wire name (`id`, `roomId`, `roomName`, `roomCapacity`)
    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "roomId" => Some(Self::RoomNumber),
            "roomName" => Some(Self::Name),
            "roomCapacity" => Some(Self::Capacity),
            _ => None,
        }
    }

    /// Wire name of the property
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::RoomNumber => "roomId",
            Self::Name => "roomName",
            Self::Capacity => "roomCapacity",
        }
    }

    fn compare(&self, a: &Room, b: &Room) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::RoomNumber => a.room_number.cmp(&b.room_number),
            Self::Name => a.name.cmp(&b.name),
            Self::Capacity => a.capacity.cmp(&b.capacity),
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
    /// Parse `asc`/`desc`, ignoring case
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// One sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub property: SortProperty,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn asc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(property: SortProperty) -> Self {
        Self {
            property,
            direction: SortDirection::Desc,
        }
    }
}

/// Ordered list of sort keys.
///
/// Rooms that compare equal on every key are ordered by ascending id, so an
/// empty sort yields insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort(Vec<SortOrder>);

impl Sort {
    /// No explicit ordering (insertion order)
    pub fn unsorted() -> Self {
        Self(Vec::new())
    }

    pub fn by(orders: Vec<SortOrder>) -> Self {
        Self(orders)
    }

    pub fn push(&mut self, order: SortOrder) {
        self.0.push(order);
    }

    pub fn orders(&self) -> &[SortOrder] {
        &self.0
    }

    pub fn is_unsorted(&self) -> bool {
        self.0.is_empty()
    }

    /// Compare two rooms under this sort
    pub fn compare(&self, a: &Room, b: &Room) -> Ordering {
        for order in &self.0 {
            let ordering = match order.direction {
                SortDirection::Asc => order.property.compare(a, b),
                SortDirection::Desc => order.property.compare(a, b).reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        a.id.cmp(&b.id)
    }
}

/// Which slice of a listing to return
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page number
    pub page: u32,
    /// Number of rooms per page (1..=MAX_PAGE_SIZE)
    pub size: u32,
    pub sort: Sort,
}

impl PageRequest {
    /// Create a page request.
    ///
    /// A `size` of 0 falls back to `DEFAULT_PAGE_SIZE`; larger sizes are capped
    /// at `MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32, sort: Sort) -> Self {
        let size = if size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            size.min(MAX_PAGE_SIZE)
        };
        Self { page, size, sort }
    }

    /// Number of rooms to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, Sort::unsorted())
    }
}

/// One page of a listing together with the size of the whole listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Total number of elements across all pages
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            content,
            total,
            page: request.page,
            size: request.size,
        }
    }

    /// Number of pages needed to hold `total` elements
    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.size))
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page) + 1 < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }
}
