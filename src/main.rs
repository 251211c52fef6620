use iced::keyboard::{self, key, Key};
use iced::widget::{column, scrollable};
use iced::{Element, Length, Subscription, Task, Theme};
use tracing::{debug, info, warn};

mod config;
mod error;
mod logging;
mod state;
mod ui;

use config::Settings;
use state::catalog::Catalog;
use state::contact::{simulate_delivery, ContactField, Receipt};
use state::data::{ExperienceField, ProjectCategory, ProjectId};
use state::filter::Filter;
use state::page::{Page, Route, ViewMode};

/// Main application state
struct Portfolio {
    /// Everything the pages display; never mutated after startup
    catalog: Catalog,
    settings: Settings,
    /// The mounted page and its private state
    page: Page,
    /// Last contact submission number handed out, across every visit
    submissions: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Mount a page with fresh state
    Navigate(Route),
    SetProjectFilter(Filter<ProjectCategory>),
    SetViewMode(ViewMode),
    /// Open the detail overlay for a project
    OpenProject(ProjectId),
    /// Close button, backdrop click or Escape
    CloseOverlay,
    /// Gallery dot clicked in the overlay
    ShowImage(usize),
    SetExperienceFilter(Filter<ExperienceField>),
    ContactEdited(ContactField, String),
    SubmitContact,
    /// Simulated delivery finished
    ContactDelivered(Receipt),
    ResetContact,
    /// Put an outbound link (mailto, tel, URL) on the clipboard
    CopyLink(String),
}

impl Portfolio {
    /// Create a new instance of the application on the home page
    fn new(catalog: Catalog, settings: Settings) -> (Self, Task<Message>) {
        info!(
            projects = catalog.projects().len(),
            "Portfolio ready for {}",
            catalog.person().name
        );

        (
            Portfolio {
                catalog,
                settings,
                page: Page::mount(Route::Home),
                submissions: 0,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        let name = &self.catalog.person().name;
        match self.page.route().title() {
            Some(section) => format!("{section} | {name}"),
            None => name.clone(),
        }
    }

    /// Handle application messages and update state
    ///
    /// Messages meant for a page other than the mounted one are dropped;
    /// their state went away with the page.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                info!(from = ?self.page.route(), to = ?route, "Navigating");
                self.page = Page::mount(route);
            }
            Message::SetProjectFilter(filter) => {
                if let Page::Portfolio(page) = &mut self.page {
                    page.set_filter(filter);
                }
            }
            Message::SetViewMode(mode) => {
                if let Page::Portfolio(page) = &mut self.page {
                    page.set_view_mode(mode);
                }
            }
            Message::OpenProject(id) => {
                if let Page::Portfolio(page) = &mut self.page {
                    page.overlay.open(&self.catalog, &id);
                }
            }
            Message::CloseOverlay => {
                if let Page::Portfolio(page) = &mut self.page {
                    page.overlay.close();
                }
            }
            Message::ShowImage(index) => {
                if let Page::Portfolio(page) = &mut self.page {
                    page.overlay.show_image(&self.catalog, index);
                }
            }
            Message::SetExperienceFilter(filter) => {
                if let Page::Experience(page) = &mut self.page {
                    page.set_filter(filter);
                }
            }
            Message::ContactEdited(field, value) => {
                if let Page::Contact(form) = &mut self.page {
                    form.edit(field, value);
                }
            }
            Message::SubmitContact => {
                if let Page::Contact(form) = &mut self.page {
                    let attempt = self.submissions + 1;
                    if let Some(draft) = form.begin_submit(attempt) {
                        self.submissions = attempt;
                        return Task::perform(
                            simulate_delivery(attempt, draft, self.settings.submit_delay()),
                            Message::ContactDelivered,
                        );
                    }
                }
            }
            Message::ContactDelivered(receipt) => match &mut self.page {
                Page::Contact(form) => form.complete(&receipt),
                _ => debug!(attempt = receipt.attempt, "Contact page gone, receipt dropped"),
            },
            Message::ResetContact => {
                if let Page::Contact(form) = &mut self.page {
                    form.reset();
                }
            }
            Message::CopyLink(link) => {
                debug!(%link, "Copying link to clipboard");
                return iced::clipboard::write(link);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content: Element<Message> = match &self.page {
            Page::Home => ui::home::view(&self.catalog, &self.settings),
            Page::About => ui::about::view(&self.catalog),
            Page::Experience(page) => ui::experience::view(&self.catalog, page),
            Page::Portfolio(page) => ui::portfolio::view(&self.catalog, &self.settings, page),
            Page::Contact(form) => ui::contact::view(&self.catalog, form),
        };

        let base = column![
            ui::chrome::navigation(&self.catalog, self.page.route()),
            scrollable(column![ui::page_body(content), ui::chrome::footer(&self.catalog)])
                .height(Length::Fill),
        ];

        let selected = match &self.page {
            Page::Portfolio(page) => page
                .overlay
                .selected(&self.catalog)
                .map(|project| (project, page.overlay.image_index())),
            _ => None,
        };

        match selected {
            Some((project, image_index)) => ui::overlay::modal(
                base,
                ui::overlay::view(&self.settings, project, image_index),
            ),
            None => base.into(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.settings.theme.to_theme()
    }

    /// Listen for Escape only while the overlay is up
    fn subscription(&self) -> Subscription<Message> {
        match &self.page {
            Page::Portfolio(page) if page.overlay.is_open() => {
                keyboard::on_key_press(|key, _modifiers| match key {
                    Key::Named(key::Named::Escape) => Some(Message::CloseOverlay),
                    _ => None,
                })
            }
            _ => Subscription::none(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, load_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };
    logging::init_logging(settings.verbosity);
    if let Some(err) = load_error {
        warn!(%err, "Ignoring unusable settings file");
    }

    let catalog = Catalog::embedded()?;
    let window_size = (settings.window_width, settings.window_height);

    iced::application(Portfolio::title, Portfolio::update, Portfolio::view)
        .theme(Portfolio::theme)
        .subscription(Portfolio::subscription)
        .window_size(window_size)
        .centered()
        .run_with(move || Portfolio::new(catalog, settings))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::contact::SubmissionStatus;

    fn app() -> Portfolio {
        logging::init_test_logging();
        let catalog = Catalog::embedded().unwrap();
        Portfolio::new(catalog, Settings::default()).0
    }

    fn portfolio_page(app: &Portfolio) -> &state::page::PortfolioPage {
        match &app.page {
            Page::Portfolio(page) => page,
            other => panic!("expected portfolio page, got {other:?}"),
        }
    }

    fn contact_status(app: &Portfolio) -> SubmissionStatus {
        match &app.page {
            Page::Contact(form) => form.status(),
            other => panic!("expected contact page, got {other:?}"),
        }
    }

    fn fill_contact_form(app: &mut Portfolio) {
        for (field, value) in [
            (ContactField::FirstName, "John"),
            (ContactField::LastName, "Doe"),
            (ContactField::Email, "john@example.com"),
            (ContactField::Subject, "Project Inquiry"),
            (ContactField::Message, "Hello"),
        ] {
            let _ = app.update(Message::ContactEdited(field, value.to_string()));
        }
    }

    #[test]
    fn test_starts_on_home() {
        let app = app();
        assert_eq!(app.page.route(), Route::Home);
        assert_eq!(app.title(), "Alex Morgan");
    }

    #[test]
    fn test_title_follows_route() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::About));
        assert_eq!(app.title(), "About | Alex Morgan");
    }

    #[test]
    fn test_filter_and_view_mode_are_independent() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Portfolio));
        let _ = app.update(Message::SetProjectFilter(Filter::Only(ProjectCategory::Photo)));
        let _ = app.update(Message::SetViewMode(ViewMode::List));

        let page = portfolio_page(&app);
        assert_eq!(page.filter, Filter::Only(ProjectCategory::Photo));
        assert_eq!(page.view_mode, ViewMode::List);

        let _ = app.update(Message::SetProjectFilter(Filter::All));
        assert_eq!(portfolio_page(&app).view_mode, ViewMode::List);
    }

    #[test]
    fn test_selection_ignores_active_filter() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Portfolio));
        let _ = app.update(Message::SetProjectFilter(Filter::Only(ProjectCategory::Photo)));
        let _ = app.update(Message::OpenProject(ProjectId::from("2")));

        let page = portfolio_page(&app);
        let selected = page.overlay.selected(&app.catalog).unwrap();
        assert_eq!(selected.category, ProjectCategory::Video);
    }

    #[test]
    fn test_overlay_image_index_resets_across_selections() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Portfolio));
        let _ = app.update(Message::OpenProject(ProjectId::from("1")));
        let _ = app.update(Message::ShowImage(2));
        assert_eq!(portfolio_page(&app).overlay.image_index(), 2);

        let _ = app.update(Message::CloseOverlay);
        let _ = app.update(Message::OpenProject(ProjectId::from("3")));
        assert_eq!(portfolio_page(&app).overlay.image_index(), 0);
    }

    #[test]
    fn test_repeated_close_restores_scroll_once() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Portfolio));
        let _ = app.update(Message::OpenProject(ProjectId::from("4")));
        let _ = app.update(Message::CloseOverlay);
        let _ = app.update(Message::CloseOverlay);

        let page = portfolio_page(&app);
        assert!(!page.overlay.is_open());
        assert_eq!(page.overlay.scroll_lock().releases(), 1);
    }

    #[test]
    fn test_navigation_discards_page_state() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Portfolio));
        let _ = app.update(Message::SetViewMode(ViewMode::List));
        let _ = app.update(Message::OpenProject(ProjectId::from("1")));

        let _ = app.update(Message::Navigate(Route::Experience));
        let _ = app.update(Message::Navigate(Route::Portfolio));

        let page = portfolio_page(&app);
        assert_eq!(page.view_mode, ViewMode::Grid);
        assert!(!page.overlay.is_open());
    }

    #[test]
    fn test_messages_for_other_pages_are_ignored() {
        let mut app = app();
        let _ = app.update(Message::SetViewMode(ViewMode::List));
        let _ = app.update(Message::OpenProject(ProjectId::from("1")));
        let _ = app.update(Message::SubmitContact);
        assert_eq!(app.page, Page::Home);
    }

    #[test]
    fn test_experience_filter() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Experience));
        let _ = app.update(Message::SetExperienceFilter(Filter::Only(
            ExperienceField::Marketing,
        )));

        match &app.page {
            Page::Experience(page) => {
                let shown = page.filter.apply(app.catalog.experiences());
                let ids: Vec<&str> = shown.iter().map(|e| e.id.as_str()).collect();
                assert_eq!(ids, vec!["1", "3", "5"]);
            }
            other => panic!("expected experience page, got {other:?}"),
        }
    }

    #[test]
    fn test_contact_submission_sequence() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Contact));
        assert_eq!(contact_status(&app), SubmissionStatus::Idle);

        fill_contact_form(&mut app);
        let _ = app.update(Message::SubmitContact);
        assert_eq!(contact_status(&app), SubmissionStatus::Submitting);

        let _ = app.update(Message::ContactDelivered(Receipt { attempt: 1 }));
        assert_eq!(contact_status(&app), SubmissionStatus::Submitted);

        let _ = app.update(Message::SubmitContact);
        assert_eq!(contact_status(&app), SubmissionStatus::Submitted);

        let _ = app.update(Message::ResetContact);
        assert_eq!(contact_status(&app), SubmissionStatus::Idle);
    }

    #[test]
    fn test_receipt_after_leaving_contact_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Contact));
        fill_contact_form(&mut app);
        let _ = app.update(Message::SubmitContact);

        let _ = app.update(Message::Navigate(Route::Home));
        let _ = app.update(Message::ContactDelivered(Receipt { attempt: 1 }));
        assert_eq!(app.page, Page::Home);

        let _ = app.update(Message::Navigate(Route::Contact));
        assert_eq!(contact_status(&app), SubmissionStatus::Idle);
    }

    #[test]
    fn test_receipt_from_previous_visit_does_not_complete_new_form() {
        let mut app = app();
        let _ = app.update(Message::Navigate(Route::Contact));
        fill_contact_form(&mut app);
        let _ = app.update(Message::SubmitContact);

        let _ = app.update(Message::Navigate(Route::Home));
        let _ = app.update(Message::Navigate(Route::Contact));
        fill_contact_form(&mut app);
        let _ = app.update(Message::SubmitContact);

        let _ = app.update(Message::ContactDelivered(Receipt { attempt: 1 }));
        assert_eq!(contact_status(&app), SubmissionStatus::Submitting);

        let _ = app.update(Message::ContactDelivered(Receipt { attempt: 2 }));
        assert_eq!(contact_status(&app), SubmissionStatus::Submitted);
    }
}
