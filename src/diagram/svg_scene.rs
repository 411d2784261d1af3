//! Builds the SVG scene graph inside the host container and exposes the
//! handful of mutations the cycle controller needs.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::curve::Point;
use super::layout::Layout;
use super::scene::Scene;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Fills for the person figure and the table legs; the stylesheet picks the
// gradients up through the url(#...) references below.
const GRADIENT_DEFS: &str = r##"
    <linearGradient id="userGradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="#4f8ef7"/>
      <stop offset="100%" stop-color="#1e56d0"/>
    </linearGradient>
    <linearGradient id="tableGradient" x1="0%" y1="0%" x2="0%" y2="100%">
      <stop offset="0%" stop-color="#e8ecf3"/>
      <stop offset="100%" stop-color="#c8d0dc"/>
    </linearGradient>
"##;

/// Live handles to the elements the animation mutates. Everything else in the
/// scene is created once and then left alone.
pub struct SvgScene {
    capsule: Element,
    capsule_text: Element,
    table_top: Element,
    compartment_dot: Element,
    waves: Element,
}

fn svg_el(doc: &Document, tag: &str) -> Result<Element, JsValue> {
    doc.create_element_ns(Some(SVG_NS), tag)
}

/// Stroked figure path in the person's blue, round caps, no fill.
fn figure_path(doc: &Document, d: &str, width: &str) -> Result<Element, JsValue> {
    let el = svg_el(doc, "path")?;
    el.set_attribute("d", d)?;
    el.set_attribute("stroke", "#4f8ef7")?;
    el.set_attribute("stroke-width", width)?;
    el.set_attribute("stroke-linecap", "round")?;
    el.set_attribute("fill", "none")?;
    Ok(el)
}

fn caption(doc: &Document, at: Point, text: &str) -> Result<Element, JsValue> {
    let el = svg_el(doc, "text")?;
    el.set_attribute("x", &at.x.to_string())?;
    el.set_attribute("y", &at.y.to_string())?;
    el.set_attribute("text-anchor", "middle")?;
    el.set_attribute("class", "diagram-label")?;
    el.set_text_content(Some(text));
    Ok(el)
}

impl SvgScene {
    pub fn build(doc: &Document, container: &Element, layout: &Layout) -> Result<Self, JsValue> {
        let svg = svg_el(doc, "svg")?;
        svg.set_attribute(
            "viewBox",
            &format!("0 0 {} {}", layout.width, layout.height),
        )?;
        svg.set_attribute("class", "diagram-svg")?;
        svg.set_attribute("role", "img")?;
        svg.set_attribute("aria-label", crate::DIAGRAM_DESCRIPTION)?;
        container.append_child(&svg)?;

        let defs = svg_el(doc, "defs")?;
        defs.set_inner_html(GRADIENT_DEFS);
        svg.append_child(&defs)?;

        // Ground line under both figures.
        let ground = svg_el(doc, "line")?;
        ground.set_attribute("x1", &layout.ground_x0.to_string())?;
        ground.set_attribute("y1", &layout.ground_y.to_string())?;
        ground.set_attribute("x2", &layout.ground_x1.to_string())?;
        ground.set_attribute("y2", &layout.ground_y.to_string())?;
        ground.set_attribute("stroke", "#d0d8e8")?;
        ground.set_attribute("stroke-width", "1.5")?;
        ground.set_attribute("stroke-linecap", "round")?;
        ground.set_attribute("opacity", "0.6")?;
        svg.append_child(&ground)?;

        // Person: head, torso, arms, legs, caption.
        let p = layout.person;
        let person = svg_el(doc, "g")?;
        svg.append_child(&person)?;

        let head = svg_el(doc, "circle")?;
        head.set_attribute("cx", &p.x.to_string())?;
        head.set_attribute("cy", &(p.y - 30.0).to_string())?;
        head.set_attribute("r", "15")?;
        head.set_attribute("class", "diagram-user")?;
        person.append_child(&head)?;

        let torso = figure_path(
            doc,
            &format!("M {} {} L {} {}", p.x, p.y - 14.0, p.x, p.y + 14.0),
            "2.5",
        )?;
        person.append_child(&torso)?;
        for d in [
            format!("M {} {} L {} {}", p.x, p.y - 4.0, p.x - 18.0, p.y + 6.0),
            format!("M {} {} L {} {}", p.x, p.y - 4.0, p.x + 22.0, p.y + 2.0),
            format!("M {} {} L {} {}", p.x, p.y + 14.0, p.x - 12.0, p.y + 36.0),
            format!("M {} {} L {} {}", p.x, p.y + 14.0, p.x + 12.0, p.y + 36.0),
        ] {
            let limb = figure_path(doc, &d, "2")?;
            person.append_child(&limb)?;
        }
        let person_caption = caption(doc, layout.person_label, "You")?;
        person.append_child(&person_caption)?;

        // Storage table: surface, two legs, compartment strip and dot, caption.
        let t = layout.table;
        let furniture = svg_el(doc, "g")?;
        svg.append_child(&furniture)?;

        let table_top = svg_el(doc, "rect")?;
        table_top.set_attribute("x", &t.x.to_string())?;
        table_top.set_attribute("y", &t.y.to_string())?;
        table_top.set_attribute("width", &layout.table_width.to_string())?;
        table_top.set_attribute("height", &layout.table_height.to_string())?;
        table_top.set_attribute("rx", "4")?;
        table_top.set_attribute("ry", "4")?;
        table_top.set_attribute("class", "diagram-storage")?;
        furniture.append_child(&table_top)?;

        let leg_y = t.y + layout.table_height;
        for leg_x in [
            t.x + 18.0,
            t.x + layout.table_width - 18.0 - layout.leg_width,
        ] {
            let leg = svg_el(doc, "rect")?;
            leg.set_attribute("x", &leg_x.to_string())?;
            leg.set_attribute("y", &leg_y.to_string())?;
            leg.set_attribute("width", &layout.leg_width.to_string())?;
            leg.set_attribute("height", &layout.leg_height.to_string())?;
            leg.set_attribute("fill", "url(#tableGradient)")?;
            leg.set_attribute("stroke", "#a0aec0")?;
            leg.set_attribute("stroke-width", "1")?;
            leg.set_attribute("rx", "2")?;
            leg.set_attribute("ry", "2")?;
            furniture.append_child(&leg)?;
        }

        let strip = svg_el(doc, "rect")?;
        strip.set_attribute("x", &(t.x + 24.0).to_string())?;
        strip.set_attribute("y", &(t.y + 2.0).to_string())?;
        strip.set_attribute("width", &(layout.table_width - 48.0).to_string())?;
        strip.set_attribute("height", "6")?;
        strip.set_attribute("rx", "3")?;
        strip.set_attribute("ry", "3")?;
        strip.set_attribute("class", "diagram-compartment")?;
        furniture.append_child(&strip)?;

        let compartment_dot = svg_el(doc, "circle")?;
        compartment_dot.set_attribute("cx", &(t.x + layout.table_width / 2.0).to_string())?;
        compartment_dot.set_attribute("cy", &(t.y + layout.table_height / 2.0).to_string())?;
        compartment_dot.set_attribute("r", "4")?;
        compartment_dot.set_attribute("class", "diagram-compartment")?;
        furniture.append_child(&compartment_dot)?;

        let table_caption = caption(doc, layout.table_label, "Storage table")?;
        furniture.append_child(&table_caption)?;

        // Dashed guide showing the capsule's route.
        let route = layout.speech_path;
        let guide = svg_el(doc, "path")?;
        guide.set_attribute(
            "d",
            &format!(
                "M {} {} Q {} {} {} {}",
                route.p0.x, route.p0.y, route.p1.x, route.p1.y, route.p2.x, route.p2.y
            ),
        )?;
        guide.set_attribute("stroke", "#d0d7df")?;
        guide.set_attribute("stroke-width", "1.4")?;
        guide.set_attribute("fill", "none")?;
        guide.set_attribute("stroke-linecap", "round")?;
        guide.set_attribute("stroke-dasharray", "6 5")?;
        svg.append_child(&guide)?;

        // Voice waves next to the head; hidden until the controller pulses
        // their opacity at the start of a cycle.
        let waves = svg_el(doc, "g")?;
        waves.set_attribute("opacity", "0")?;
        for d in [
            format!("M {} {} q 10 -6 22 0", p.x + 22.0, p.y - 30.0),
            format!("M {} {} q 12 -7 26 0", p.x + 20.0, p.y - 24.0),
        ] {
            let wave = svg_el(doc, "path")?;
            wave.set_attribute("d", &d)?;
            wave.set_attribute("class", "diagram-wave-line")?;
            waves.append_child(&wave)?;
        }
        svg.append_child(&waves)?;

        // Speech capsule, content centered on (0, 0) so a translate puts it
        // on the path.
        let capsule = svg_el(doc, "g")?;
        let pill = svg_el(doc, "rect")?;
        pill.set_attribute("x", &(-layout.capsule_width / 2.0).to_string())?;
        pill.set_attribute("y", &(-layout.capsule_height / 2.0).to_string())?;
        pill.set_attribute("width", &layout.capsule_width.to_string())?;
        pill.set_attribute("height", &layout.capsule_height.to_string())?;
        pill.set_attribute("rx", &(layout.capsule_height / 2.0).to_string())?;
        pill.set_attribute("ry", &(layout.capsule_height / 2.0).to_string())?;
        pill.set_attribute("class", "diagram-bubble")?;
        capsule.append_child(&pill)?;

        let capsule_text = svg_el(doc, "text")?;
        capsule_text.set_attribute("x", &(-layout.capsule_width / 2.0 + 12.0).to_string())?;
        capsule_text.set_attribute("y", "4")?;
        capsule_text.set_attribute("class", "diagram-bubble-text")?;
        capsule.append_child(&capsule_text)?;
        svg.append_child(&capsule)?;

        Ok(Self {
            capsule,
            capsule_text,
            table_top,
            compartment_dot,
            waves,
        })
    }
}

impl Scene for SvgScene {
    fn set_phrase(&mut self, text: &str) {
        self.capsule_text.set_text_content(Some(text));
    }

    fn set_position(&mut self, p: Point) {
        let _ = self
            .capsule
            .set_attribute("transform", &format!("translate({:.2} {:.2})", p.x, p.y));
    }

    fn set_highlight(&mut self, on: bool) {
        let (top, dot) = if on {
            (
                "diagram-storage diagram-storage--active",
                "diagram-compartment diagram-compartment--active",
            )
        } else {
            ("diagram-storage", "diagram-compartment")
        };
        let _ = self.table_top.set_attribute("class", top);
        let _ = self.compartment_dot.set_attribute("class", dot);
    }

    fn set_voice_waves(&mut self, visible: bool) {
        let _ = self
            .waves
            .set_attribute("opacity", if visible { "1" } else { "0" });
    }
}

#[cfg(test)]
mod tests {
    use super::GRADIENT_DEFS;

    #[test]
    fn gradient_defs_define_both_gradients_with_their_stops() {
        assert_eq!(GRADIENT_DEFS.matches("<linearGradient").count(), 2);
        assert_eq!(GRADIENT_DEFS.matches("</linearGradient>").count(), 2);
        for needle in [
            "id=\"userGradient\"",
            "id=\"tableGradient\"",
            "stop-color=\"#4f8ef7\"",
            "stop-color=\"#1e56d0\"",
            "stop-color=\"#e8ecf3\"",
            "stop-color=\"#c8d0dc\"",
        ] {
            assert!(
                GRADIENT_DEFS.contains(needle),
                "missing {} in gradient defs",
                needle
            );
        }
    }
}
