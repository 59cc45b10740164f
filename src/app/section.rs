// SPDX-License-Identifier: MPL-2.0
//! Page sections reachable from the navigation menu.

/// Sections the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Products,
    Gallery,
    Enquiry,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Products,
        Section::Gallery,
        Section::Enquiry,
        Section::Contact,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::Products => "nav-products",
            Section::Gallery => "nav-gallery",
            Section::Enquiry => "nav-enquiry",
            Section::Contact => "nav-contact",
        }
    }
}
