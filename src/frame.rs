use crate::canvas::CanvasSurface;
use crate::dom;
use acqmap_core::{GlobeRenderer, GlobeScene, GlobeSize, ParameterPanel};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub panel: Rc<ParameterPanel>,
    pub scene: Rc<RefCell<GlobeScene>>,
    pub renderer: GlobeRenderer,
    pub size: Option<GlobeSize>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // parameters are read once, at the top of the frame
        let params = self.panel.snapshot();
        let size = GlobeSize::new(dom::host_width(&self.canvas), params.padding);
        if self.size.map(|s| s.width) != Some(size.width) {
            log::info!("[frame] globe width {:.0}px", size.width);
            self.surface.resize(&self.canvas, size.width);
        }
        self.size = Some(size);

        let mut scene = self.scene.borrow_mut();
        scene.refresh(&params);
        let layers = scene.layers();
        self.renderer.frame(&mut self.surface, size, &params, &layers);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive `frame_ctx` from requestAnimationFrame until `running` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Tick) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
