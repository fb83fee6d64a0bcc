//! Browser backend: DOM readouts and `performance.now()`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Performance};

use super::{Clock, Hud};

/// Monotonic clock backed by `window.performance`
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new() -> Self {
        let performance = web_sys::window().and_then(|w| w.performance());
        if performance.is_none() {
            log::warn!("window.performance unavailable - falling back to Date.now()");
        }
        Self { performance }
    }
}

impl Default for PerformanceClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// HUD living in the page around the canvas
pub struct DomHud {
    document: Document,
    pitch_count: Option<Element>,
    hit_count: Option<Element>,
    flight_distance: Option<Element>,
    game_message: Option<Element>,
    bat: Option<Element>,
    on_restart: Option<Closure<dyn FnMut()>>,
}

fn lookup(document: &Document, id: &str) -> Option<Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("Element #{} not found", id);
    }
    el
}

impl DomHud {
    pub fn new(document: Document) -> Self {
        Self {
            pitch_count: lookup(&document, "pitch-count"),
            hit_count: lookup(&document, "hit-count"),
            flight_distance: lookup(&document, "flight-distance"),
            game_message: lookup(&document, "game-message"),
            bat: lookup(&document, "bat"),
            document,
            on_restart: None,
        }
    }

    /// Called whenever a restart button is activated
    pub fn set_restart_handler(&mut self, handler: impl FnMut() + 'static) {
        self.on_restart = Some(Closure::new(handler));
    }

    fn append_line(&self, text: &str, class: &str) -> Result<(), JsValue> {
        let Some(panel) = &self.game_message else {
            return Ok(());
        };
        let line = self.document.create_element("div")?;
        line.set_class_name(class);
        line.set_text_content(Some(text));
        panel.append_child(&line)?;
        Ok(())
    }

    fn append_restart_button(&self) -> Result<(), JsValue> {
        let Some(panel) = &self.game_message else {
            return Ok(());
        };
        let button = self.document.create_element("button")?;
        button.set_class_name("restart");
        button.set_text_content(Some("Play again"));
        if let Some(handler) = &self.on_restart {
            button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        }
        panel.append_child(&button)?;
        panel.scroll_into_view();
        Ok(())
    }
}

fn set_text(el: &Option<Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

impl Hud for DomHud {
    fn set_pitch_stat(&mut self, count: u32, max: u32) {
        set_text(&self.pitch_count, &format!("Pitches: {} / {}", count, max));
    }

    fn set_hit_stat(&mut self, count: u32, max: u32) {
        set_text(&self.hit_count, &format!("Home runs: {} / {}", count, max));
    }

    fn set_flight_distance(&mut self, meters: u32) {
        set_text(&self.flight_distance, &format!("Distance: {} m!", meters));
    }

    fn set_swing_pose(&mut self, swinging: bool) {
        if let Some(bat) = &self.bat {
            let classes = bat.class_list();
            let result = if swinging {
                classes.add_1("swing")
            } else {
                classes.remove_1("swing")
            };
            if let Err(e) = result {
                log::warn!("Bat pose update failed: {:?}", e);
            }
        }
    }

    fn show_outcome(&mut self, message: &str, is_clear: bool) {
        if let Some(panel) = &self.game_message {
            panel.set_inner_html("");
        }
        let class = if is_clear { "outcome clear" } else { "outcome fail" };
        if let Err(e) = self.append_line(message, class) {
            log::warn!("Outcome display failed: {:?}", e);
        }
    }

    fn show_distance_summary(&mut self, meters: u32) {
        if let Err(e) = self.append_line(&format!("Total distance: {} m", meters), "distance") {
            log::warn!("Distance summary failed: {:?}", e);
        }
    }

    fn show_restart_affordance(&mut self) {
        if let Err(e) = self.append_restart_button() {
            log::warn!("Restart button failed: {:?}", e);
        }
    }

    fn clear(&mut self) {
        set_text(&self.flight_distance, "");
        if let Some(panel) = &self.game_message {
            panel.set_inner_html("");
        }
    }
}
