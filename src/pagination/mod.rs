use std::fmt;

use serde::{Serialize, Serializer};

pub const PAGE_SIZE: usize = 5;

const MAX_FULL_PAGES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow<'a, T> {
    pub slice: &'a [T],
    pub total_pages: usize,
    pub first_index: usize,
    pub last_index: usize,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

// Does not clamp `current_page`; an out-of-range page gives an empty slice.
pub fn paginate<T>(matched: &[T], page_size: usize, current_page: usize) -> PageWindow<'_, T> {
    let len = matched.len();
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    let end = current_page.saturating_mul(page_size).min(len);
    let slice = if current_page == 0 || start >= end {
        &matched[0..0]
    } else {
        &matched[start..end]
    };
    PageWindow {
        slice,
        total_pages: total_pages(len, page_size),
        first_index: start.saturating_add(1),
        last_index: end,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Ellipsis => write!(f, "..."),
        }
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n as u64),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

pub fn compressed_page_numbers(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total_pages <= MAX_FULL_PAGES {
        return (1..=total_pages).map(Page).collect();
    }
    if current_page <= 3 {
        let mut out: Vec<PageToken> = (1..=4).map(Page).collect();
        out.push(Ellipsis);
        out.push(Page(total_pages));
        return out;
    }
    if current_page >= total_pages - 2 {
        let mut out = vec![Page(1), Ellipsis];
        out.extend((total_pages - 3..=total_pages).map(Page));
        return out;
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}
