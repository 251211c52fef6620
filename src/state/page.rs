//! Routes and per-page view state.
//!
//! Each mounted page owns its own state; navigating replaces the whole
//! [`Page`], so filters, view mode, overlay and form never leak between
//! visits.

use tracing::debug;

use super::contact::ContactForm;
use super::data::{ExperienceField, ProjectCategory};
use super::filter::Filter;
use super::overlay::Overlay;

/// Directly addressable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Experience,
    Portfolio,
    Contact,
}

impl Route {
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Experience => "/experience",
            Self::Portfolio => "/portfolio",
            Self::Contact => "/contact",
        }
    }

    pub fn from_href(href: &str) -> Option<Self> {
        let route = match href.trim_end_matches('/') {
            "" => Self::Home,
            "/about" => Self::About,
            "/experience" => Self::Experience,
            "/portfolio" => Self::Portfolio,
            "/contact" => Self::Contact,
            _ => return None,
        };
        Some(route)
    }

    /// Window title suffix
    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::About => Some("About"),
            Self::Experience => Some("Experience"),
            Self::Portfolio => Some("Portfolio"),
            Self::Contact => Some("Contact"),
        }
    }
}

/// Card grid or compact rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PortfolioPage {
    pub filter: Filter<ProjectCategory>,
    pub view_mode: ViewMode,
    pub overlay: Overlay,
}

impl PortfolioPage {
    pub fn set_filter(&mut self, filter: Filter<ProjectCategory>) {
        if self.filter != filter {
            debug!(?filter, "Portfolio filter changed");
            self.filter = filter;
        }
    }

    /// Switch layout. Selecting the current mode does nothing.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode != mode {
            debug!(?mode, "Portfolio view mode changed");
            self.view_mode = mode;
        }
    }

    /// Sections are only shown for the wildcard filter.
    pub fn show_sections(&self) -> bool {
        self.filter.is_all()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExperiencePage {
    pub filter: Filter<ExperienceField>,
}

impl ExperiencePage {
    pub fn set_filter(&mut self, filter: Filter<ExperienceField>) {
        if self.filter != filter {
            debug!(?filter, "Experience filter changed");
            self.filter = filter;
        }
    }
}

/// The mounted page and the state that lives only as long as it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Experience(ExperiencePage),
    Portfolio(PortfolioPage),
    Contact(ContactForm),
}

impl Page {
    /// Mount `route` with fresh state.
    pub fn mount(route: Route) -> Self {
        match route {
            Route::Home => Self::Home,
            Route::About => Self::About,
            Route::Experience => Self::Experience(ExperiencePage::default()),
            Route::Portfolio => Self::Portfolio(PortfolioPage::default()),
            Route::Contact => Self::Contact(ContactForm::default()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Self::Home => Route::Home,
            Self::About => Route::About,
            Self::Experience(_) => Route::Experience,
            Self::Portfolio(_) => Route::Portfolio,
            Self::Contact(_) => Route::Contact,
        }
    }
}
