//! Browser frame scheduler and presenter

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::frame::{FrameError, FrameScheduler, FrameToken};
use crate::game::Presenter;
use crate::sim::{GamePhase, Snapshot};

// Hand each frame to whatever draws the field (canvas, DOM, ...)
#[wasm_bindgen(inline_js = "
    export function present_frame(json) {
        if (typeof window.renderHenFlap === 'function') {
            window.renderHenFlap(JSON.parse(json));
        }
    }
")]
extern "C" {
    fn present_frame(json: &str);
}

/// `requestAnimationFrame` with revocable handles
pub struct WebFrameScheduler {
    window: Window,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl WebFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: None,
        }
    }

    /// Install the frame callback; registered once for the game's lifetime
    pub fn set_callback(&mut self, callback: Closure<dyn FnMut(f64)>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for WebFrameScheduler {
    fn request_frame(&mut self) -> Result<FrameToken, FrameError> {
        let Some(callback) = &self.callback else {
            return Err(FrameError::Unavailable("no frame callback installed".into()));
        };
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameToken)
            .map_err(|e| FrameError::Unavailable(format!("{:?}", e)))
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if let Err(e) = self.window.cancel_animation_frame(token.0) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}

/// Updates the HUD and forwards the snapshot to the page's renderer
pub struct DomPresenter {
    document: Document,
    last_score: Option<u32>,
    last_phase: Option<GamePhase>,
}

impl DomPresenter {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            last_score: None,
            last_phase: None,
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(el) = self.document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "" } else { "hidden" });
        }
    }
}

impl Presenter for DomPresenter {
    fn present(&mut self, snapshot: &Snapshot) {
        // Only touch the DOM when something visible changed
        if self.last_score != Some(snapshot.score) {
            let score = snapshot.score.to_string();
            self.set_text("score", &score);
            self.set_text("final-score", &score);
            self.last_score = Some(snapshot.score);
        }
        if self.last_phase != Some(snapshot.phase) {
            self.set_visible("start-overlay", snapshot.phase == GamePhase::Idle);
            self.set_visible("game-over", snapshot.phase == GamePhase::Terminated);
            self.last_phase = Some(snapshot.phase);
        }

        present_frame(&snapshot.to_json());
    }
}
