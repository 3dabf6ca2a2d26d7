//! 渲染测试（TestBackend）

#![cfg(feature = "tui")]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

use searchdeck::catalog::{Catalog, LinkRecord};
use searchdeck::errors::Result;
use searchdeck::interfaces::tui::app::{App, Submission, Warning};
use searchdeck::interfaces::tui::theme::{DARK, LIGHT};
use searchdeck::interfaces::tui::ui;
use searchdeck::services::{ClipboardSink, LinkOpener};

struct NoopServices;

impl LinkOpener for NoopServices {
    fn open(&mut self, _url: &str) -> Result<()> {
        Ok(())
    }
}

impl ClipboardSink for NoopServices {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

fn app() -> App {
    let catalog = Catalog::from_iter([
        (
            "Servers".to_string(),
            vec![
                LinkRecord::new("Shodan", "https://www.shodan.io", "Devices"),
                LinkRecord::new("Censys", "https://search.censys.io", ""),
            ],
        ),
        ("DNS".to_string(), vec![]),
    ]);
    App::new(catalog, Box::new(NoopServices), Box::new(NoopServices))
}

fn render(app: &mut App) -> Buffer {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_selector_screen_lists_categories() {
    let mut app = app();
    let text = buffer_text(&render(&mut app));

    assert!(text.contains("Hacker Search Engines Pro"));
    assert!(text.contains("Categories (2/2)"));
    assert!(text.contains("[ ] DNS"));
    assert!(text.contains("[ ] Servers"));
    assert!(text.contains("Theme: Dark"));
}

#[test]
fn test_selected_count_in_title() {
    let mut app = app();
    app.selector.select_all_visible();
    let text = buffer_text(&render(&mut app));
    assert!(text.contains("2 selected"));
    assert!(text.contains("[x] DNS"));
}

#[test]
fn test_results_screen_shows_table() {
    let mut app = app();
    app.submit(Submission::new(["Servers", "DNS"]));
    let text = buffer_text(&render(&mut app));

    assert!(text.contains("Servers (2/2)"));
    assert!(text.contains("Name"));
    assert!(text.contains("Link"));
    assert!(text.contains("Description"));
    assert!(text.contains("https://www.shodan.io"));
    assert!(text.contains("Censys"));
}

#[test]
fn test_empty_tab_message() {
    let mut app = app();
    app.submit(Submission::new(["DNS"]));
    let text = buffer_text(&render(&mut app));
    assert!(text.contains("No records in this category"));
}

#[test]
fn test_sort_indicator_in_header() {
    let mut app = app();
    app.submit(Submission::new(["Servers"]));
    if let Some(table) = app.results.as_mut().and_then(|r| r.active_tab_mut()) {
        table.activate_header(searchdeck::interfaces::tui::app::Column::Name);
    }
    let text = buffer_text(&render(&mut app));
    assert!(text.contains("Name ▲"));
}

#[test]
fn test_warning_popup_rendered() {
    let mut app = app();
    app.warning = Some(Warning::no_selection());
    let text = buffer_text(&render(&mut app));
    assert!(text.contains("No Selection"));
    assert!(text.contains("Choose at least one category."));
}

#[test]
fn test_theme_repaints_background() {
    let mut app = app();
    let dark = render(&mut app);
    assert_eq!(dark[(0, 0)].bg, DARK.window);

    app.toggle_theme();
    let light = render(&mut app);
    assert_eq!(light[(0, 0)].bg, LIGHT.window);
    assert_ne!(light[(0, 0)].bg, Color::Reset);
}
