//! Builds the equirectangular globe texture from the page's inline world map.
//!
//! The SVG is serialised into an image, rasterised onto an offscreen 2D
//! canvas, and read back as RGBA for upload. Highlighting a country either
//! recolours its SVG region or stamps circles at its dot positions.

use crate::constants::*;
use crate::mesh::lat_lon_to_uv;
use quiz_core::{Country, Highlight};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct Compositor {
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    /// Plain map, once loaded.
    base: Option<web::HtmlImageElement>,
    /// Map with the current country recoloured, and that country.
    highlight: Option<(web::HtmlImageElement, &'static Country)>,
}

impl Compositor {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(TEXTURE_WIDTH);
        canvas.set_height(TEXTURE_HEIGHT);
        let ctx: web::CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            document: document.clone(),
            canvas,
            ctx,
            base: None,
            highlight: None,
        })
    }

    /// Serialised world map, optionally with `country`'s region recoloured.
    pub fn map_markup(&self, country: Option<&Country>) -> anyhow::Result<String> {
        let map = self
            .document
            .get_element_by_id(WORLD_MAP_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", WORLD_MAP_ID))?;
        let svg: web::Element = map
            .clone_node_with_deep(true)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        svg.remove_attribute("id").ok();
        svg.set_attribute("width", &TEXTURE_WIDTH.to_string()).ok();
        svg.set_attribute("height", &TEXTURE_HEIGHT.to_string()).ok();

        if let Some(Highlight::Fill(region)) = country.map(|c| c.highlight) {
            if svg
                .query_selector(&format!("#{}", region))
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .is_none()
            {
                anyhow::bail!("world map has no region #{}", region);
            }
            let style = self
                .document
                .create_element_ns(Some(SVG_NS), "style")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            style.set_text_content(Some(&format!(
                "#{id}, #{id} * {{ fill: {color} !important; }}",
                id = region,
                color = HIGHLIGHT_COLOR
            )));
            svg.append_child(&style)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }

        web::XmlSerializer::new()
            .and_then(|s| s.serialize_to_string(&svg))
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }

    pub fn set_base(&mut self, image: web::HtmlImageElement) {
        self.base = Some(image);
    }

    pub fn set_highlight(&mut self, image: web::HtmlImageElement, country: &'static Country) {
        self.highlight = Some((image, country));
    }

    /// Redraw the texture and return its pixels.
    pub fn compose(&self) -> anyhow::Result<web::ImageData> {
        let (w, h) = (self.canvas.width() as f64, self.canvas.height() as f64);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(OCEAN_COLOR));
        self.ctx.fill_rect(0.0, 0.0, w, h);

        let image = self
            .highlight
            .as_ref()
            .map(|(img, _)| img)
            .or(self.base.as_ref());
        if let Some(img) = image {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w, h)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        if let Some((_, country)) = &self.highlight {
            self.draw_dots(country, w, h)?;
        }

        self.ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    }

    fn draw_dots(&self, country: &Country, w: f64, h: f64) -> anyhow::Result<()> {
        let radius = country.scale.dot_radius_deg() as f64 / 360.0 * w;
        #[allow(deprecated)]
        {
            self.ctx.set_fill_style(&JsValue::from_str(HIGHLIGHT_COLOR));
            self.ctx.set_stroke_style(&JsValue::from_str(DOT_OUTLINE_COLOR));
        }
        self.ctx.set_line_width(DOT_OUTLINE_PX);
        for (lat, lon) in country.dot_positions() {
            let [u, v] = lat_lon_to_uv(lat, lon);
            let x = u as f64 * w;
            let y = v as f64 * h;
            self.ctx.begin_path();
            self.ctx
                .arc(x, y, radius, 0.0, std::f64::consts::TAU)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            self.ctx.fill();
            self.ctx.stroke();
        }
        Ok(())
    }
}

/// Rasterise SVG markup through an `<img>`; exactly one of the callbacks runs.
pub fn load_svg_image(
    markup: &str,
    on_load: impl FnOnce(web::HtmlImageElement) + 'static,
    on_error: impl FnOnce(String) + 'static,
) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let url = format!(
        "data:image/svg+xml;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(markup))
    );

    let loaded = img.clone();
    let mut on_load = Some(on_load);
    let load_closure = Closure::wrap(Box::new(move || {
        if let Some(f) = on_load.take() {
            f(loaded.clone());
        }
    }) as Box<dyn FnMut()>);
    let mut on_error = Some(on_error);
    let error_closure = Closure::wrap(Box::new(move || {
        if let Some(f) = on_error.take() {
            f("map image failed to decode".to_string());
        }
    }) as Box<dyn FnMut()>);

    img.set_onload(Some(load_closure.as_ref().unchecked_ref()));
    img.set_onerror(Some(error_closure.as_ref().unchecked_ref()));
    load_closure.forget();
    error_closure.forget();
    img.set_src(&url);
    Ok(())
}
