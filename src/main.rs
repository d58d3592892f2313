mod campaign;
mod config;
mod console;
mod input;
mod rng;
mod storage;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use campaign::Campaign;
use config::CampaignConfig;
use input::{pixel_to_cell, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Query the grid container's bounding rect and convert a click to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

/// Register a window event listener for the lifetime of the page.
fn on_window_event(name: &str, f: impl FnMut() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
    {
        console::warn(&format!("Failed to listen for {name}: {e:?}"));
    }
    callback.forget();
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let now_ms = js_sys::Date::now();
    let mut campaign = Campaign::load(
        CampaignConfig::default(),
        storage::browser_store(),
        rng::browser_rng(),
        now_ms,
    );
    campaign.start(now_ms);

    let state = Rc::new(RefCell::new(campaign));

    // Page teardown / back-forward cache restore.
    on_window_event("pagehide", {
        let state = state.clone();
        move || state.borrow_mut().stop()
    });
    on_window_event("pageshow", {
        let state = state.clone();
        move || state.borrow_mut().start(js_sys::Date::now())
    });

    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let state = state.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(action_id) = action {
                state
                    .borrow_mut()
                    .handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let state = state.clone();
        move |key_event| {
            let event = match key_event.code {
                KeyCode::Char(c) => InputEvent::Key(c),
                KeyCode::Enter => InputEvent::Key('\n'),
                _ => return,
            };
            state.borrow_mut().handle_input(&event);
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let mut campaign = state.borrow_mut();
            campaign.update(js_sys::Date::now());

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            campaign.render(f, size, &click_state);
        }
    });

    Ok(())
}
