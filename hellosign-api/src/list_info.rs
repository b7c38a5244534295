/// Paging information returned with every list response.
#[derive(serde::Serialize, serde::Deserialize, Clone, Default, Debug, PartialEq)]
#[serde(default)]
pub struct ListInfo {
    pub page: u32,
    pub num_pages: u32,
    pub num_results: u32,
    pub page_size: u32,
}

/// Paging parameters for list calls. Unset values use the server defaults.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ListQuery {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub(crate) fn to_query(self) -> Vec<(&'static str, String)> {
        let mut acc = vec![];
        if let Some(page) = self.page {
            acc.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            acc.push(("page_size", page_size.to_string()));
        }
        acc
    }
}
