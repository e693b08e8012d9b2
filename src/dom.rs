//! Browser binding: drives real elements through `web-sys`.
//!
//! This module is the only place that touches the DOM. [`DomVisual`]
//! implements [`VisualAdapter`] with inline styles; [`DomRuler`] wraps a
//! [`RulerCore`], reads element geometry when pointer events arrive, and
//! forwards them. Wiring the DOM listeners to these methods is left to the
//! host framework.

use serde_json::Value;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::RulerConfig;
use crate::consts::SETTLE_DURATION_MS;
use crate::controller::RulerCore;
use crate::error::RulerError;
use crate::input::{Point, Surface};
use crate::resolve::SelectionState;
use crate::visual::VisualAdapter;

/// Positions the handle (`left`) and the fill bar (`width`) with inline styles.
///
/// Animation is a CSS transition set just before the target value, so the
/// browser runs it without further involvement from the controller.
#[derive(Debug, Clone)]
pub struct DomVisual {
    handle: HtmlElement,
    fill: HtmlElement,
}

impl DomVisual {
    #[must_use]
    pub fn new(handle: HtmlElement, fill: HtmlElement) -> Self {
        Self { handle, fill }
    }

    fn apply(&self, px: f64, transition: &str) {
        let value = format!("{px}px");
        for (element, property) in [(&self.handle, "left"), (&self.fill, "width")] {
            let style = element.style();
            let result = style
                .set_property("transition", transition)
                .and_then(|()| style.set_property(property, &value));
            if let Err(err) = result {
                warn!(?err, property, px, "ruler style update failed");
            }
        }
    }
}

impl VisualAdapter for DomVisual {
    fn set_immediate(&mut self, px: f64) {
        self.apply(px, "none");
    }

    fn animate_to(&mut self, px: f64) {
        let transition = format!("left {SETTLE_DURATION_MS}ms ease, width {SETTLE_DURATION_MS}ms ease");
        self.apply(px, &transition);
    }
}

/// A ruler mounted on live document elements.
pub struct DomRuler {
    track: HtmlElement,
    handle: HtmlElement,
    pub core: RulerCore<Value, DomVisual>,
}

impl DomRuler {
    /// Look up the configured elements, read the track width once, and commit
    /// the initial selection.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::ElementMissing`] or [`RulerError::NotHtmlElement`]
    /// when a selector does not resolve to an `HTMLElement`,
    /// [`RulerError::Dom`] when the lookup itself fails, and the construction
    /// errors of [`RulerCore::new`].
    pub fn mount<F>(document: &Document, config: &RulerConfig<Value>, on_commit: F) -> Result<Self, RulerError>
    where
        F: FnMut(&SelectionState<Value>) + 'static,
    {
        let track = query_html(document, &config.selectors.track)?;
        let handle = query_html(document, &config.selectors.handle)?;
        let fill = query_html(document, &config.selectors.fill)?;

        let width = f64::from(track.offset_width());
        let visual = DomVisual::new(handle.clone(), fill);
        let core = RulerCore::new(config, width, visual, on_commit)?;
        Ok(Self { track, handle, core })
    }

    /// Pointer pressed on `surface` at page position `page`.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::Dom`] when the page scroll offset cannot be read.
    pub fn on_pointer_down(&mut self, surface: Surface, page: Point) -> Result<(), RulerError> {
        match surface {
            Surface::Handle => {
                let handle_pos = Point::new(f64::from(self.handle.offset_left()), f64::from(self.handle.offset_top()));
                self.core.handle_start(page, handle_pos);
            }
            Surface::Track => {
                let track_left = page_left(&self.track)?;
                self.core.track_start(page, track_left);
            }
        }
        Ok(())
    }

    /// Pointer moved while pressed; only the handle tracks moves.
    pub fn on_pointer_move(&mut self, page: Point) {
        self.core.handle_move(page);
    }

    /// Pointer released on either surface.
    pub fn on_pointer_up(&mut self) {
        self.core.end();
    }
}

fn query_html(document: &Document, selector: &str) -> Result<HtmlElement, RulerError> {
    let element = document
        .query_selector(selector)?
        .ok_or_else(|| RulerError::ElementMissing { selector: selector.to_string() })?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| RulerError::NotHtmlElement { selector: selector.to_string() })
}

/// Left edge of `element` in page coordinates.
fn page_left(element: &HtmlElement) -> Result<f64, RulerError> {
    let window = web_sys::window().ok_or_else(|| RulerError::Dom("no global window".to_string()))?;
    Ok(element.get_bounding_client_rect().left() + window.scroll_x()?)
}
