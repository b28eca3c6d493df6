//! Particle host backed by a real container element.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::particles::{ParticleHost, ParticleLook, ParticleNode, ParticleShape};
use crate::animation::Pose;
use crate::error::EffectError;
use crate::icons::HEART_PATH;

#[derive(Clone)]
pub struct DomNode {
    element: HtmlElement,
    top_offset_px: f64,
}

impl ParticleNode for DomNode {
    fn place(&self, left_percent: f64, top_percent: f64) {
        let style = self.element.style();
        let _ = style.set_property("left", &format!("{:.3}%", left_percent));
        let _ = style.set_property(
            "top",
            &format!("calc({:.3}% + {:.1}px)", top_percent, self.top_offset_px),
        );
    }

    fn render(&self, pose: &Pose) {
        let style = self.element.style();
        let _ = style.set_property("transform", &pose.transform_css());
        let _ = style.set_property("opacity", &format!("{:.3}", pose.opacity));
    }
}

pub struct DomHost {
    container: Option<Element>,
}

impl DomHost {
    pub fn new(container: Option<Element>) -> Self {
        Self { container }
    }
}

fn css_text(look: &ParticleLook) -> String {
    let mut css = format!(
        "position: absolute; pointer-events: none; width: {size:.2}px; height: {size:.2}px; \
         left: {left:.3}%; top: calc({top:.3}% + {offset:.1}px); opacity: {opacity:.3}; \
         will-change: transform, opacity;",
        size = look.size_px,
        left = look.left_percent,
        top = look.top_percent,
        offset = look.top_offset_px,
        opacity = look.opacity,
    );
    match look.shape {
        ParticleShape::Heart => {}
        ParticleShape::Dot => {
            css.push_str(&format!(" background: {}; border-radius: 50%;", look.color));
            if let Some(glow) = look.glow_px {
                css.push_str(&format!(" box-shadow: 0 0 {:.1}px {};", glow, look.color));
            }
        }
        ParticleShape::Petal => {
            css.push_str(&format!(" background: {}; border-radius: 50% 0 50% 50%;", look.color));
        }
    }
    css
}

impl ParticleHost for DomHost {
    type Node = DomNode;

    fn is_attached(&self) -> bool {
        self.container.as_ref().map(|c| c.is_connected()).unwrap_or(false)
    }

    fn height_px(&self) -> f64 {
        self.container
            .as_ref()
            .map(|c| c.client_height() as f64)
            .unwrap_or(0.0)
    }

    fn spawn(&mut self, look: &ParticleLook) -> Result<DomNode, EffectError> {
        let container = self.container.as_ref().ok_or(EffectError::MissingContainer)?;
        let document = container.owner_document().ok_or(EffectError::MissingContainer)?;
        let element = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| EffectError::Dom("created node is not an HtmlElement".to_string()))?;
        element.style().set_css_text(&css_text(look));
        element.set_attribute("data-particle", &look.index.to_string())?;
        if look.shape == ParticleShape::Heart {
            element.set_inner_html(&format!(
                r#"<svg viewBox="0 0 24 24" fill="{}" style="width:100%;height:100%;display:block"><path d="{}"/></svg>"#,
                look.color, HEART_PATH
            ));
        }
        container.append_child(&element)?;
        Ok(DomNode { element, top_offset_px: look.top_offset_px })
    }

    fn remove(&mut self, node: &DomNode) {
        node.element.remove();
    }
}
