//! Dig Site entry point
//!
//! Handles platform-specific initialization and runs the redraw loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use dig_site::consts::*;
    use dig_site::renderer::{site_scene, RenderState};
    use dig_site::sim::{Artifact, SiteEvent, SiteState};
    use dig_site::{QualityPreset, Settings};
    use glam::Vec2;

    /// Widget instance holding all state
    struct Site {
        state: SiteState,
        render_state: Option<RenderState>,
        settings: Settings,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Site {
        fn new(seed: u64) -> Self {
            Self {
                state: SiteState::new(seed, SURFACE_WIDTH, SURFACE_HEIGHT),
                render_state: None,
                settings: Settings::load(),
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Advance per-frame effects and FPS bookkeeping
        fn update(&mut self, dt: f32, time: f64) {
            self.state.fade_effects(dt);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Calculate FPS from oldest to newest frame
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = site_scene(&self.state, &self.settings);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let coverage = self.state.coverage();

            // Update stat counters
            if let Some(el) = document.get_element_by_id("artifactsFound") {
                el.set_text_content(Some(&self.state.artifacts_found.to_string()));
            }
            if let Some(el) = document.get_element_by_id("excavationProgress") {
                el.set_text_content(Some(&format!("{}%", coverage.round() as u32)));
            }

            // Update progress bar
            if let Some(el) = document.get_element_by_id("progressFill") {
                if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                    let _ = el.style().set_property("width", &format!("{coverage}%"));
                }
            }
            if let Some(el) = document.get_element_by_id("progressText") {
                let text = if coverage < 100.0 {
                    format!("Excavating... {}%", coverage.round() as u32)
                } else {
                    "Site Fully Excavated!".to_string()
                };
                el.set_text_content(Some(&text));
            }

            // Update FPS counter
            if let Some(el) = document.get_element_by_id("fpsCounter") {
                let text = if self.settings.show_fps {
                    format!("{} FPS", self.fps)
                } else {
                    String::new()
                };
                el.set_text_content(Some(&text));
            }
        }
    }

    /// Map a mouse event to surface coordinates
    ///
    /// Scales from CSS pixels so digs land under the cursor even when the
    /// canvas is styled to a different size.
    fn surface_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
        let rect = canvas.get_bounding_client_rect();
        let x = (event.client_x() as f64 - rect.left()) / rect.width() * SURFACE_WIDTH as f64;
        let y = (event.client_y() as f64 - rect.top()) / rect.height() * SURFACE_HEIGHT as f64;
        (x as f32, y as f32)
    }

    /// Fill the artifact panel and show it
    fn show_artifact_panel(artifact: &Artifact) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let fields = [
            ("artifactTitle", artifact.name),
            ("artifactDescription", artifact.description),
            ("artifactCivilization", artifact.civilization),
            ("artifactPeriod", artifact.period),
            ("artifactSignificance", artifact.significance),
        ];
        for (id, text) in fields {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        if let Some(el) = document.get_element_by_id("artifactInfo") {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("display", "block");
            }
        }
    }

    /// Spawn short-lived dust motes around the dig point
    fn spawn_dust(event: &MouseEvent, count: usize) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let Some(body) = document.body() else {
            return;
        };

        for _ in 0..count {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            el.set_class_name("excavation-particles");

            let x = event.client_x() as f64 + (js_sys::Math::random() - 0.5) * 20.0;
            let y = event.client_y() as f64 + (js_sys::Math::random() - 0.5) * 20.0;
            if let Ok(el) = el.clone().dyn_into::<web_sys::HtmlElement>() {
                let _ = el.style().set_property("left", &format!("{x}px"));
                let _ = el.style().set_property("top", &format!("{y}px"));
            }

            let _ = body.append_child(&el);

            let remove = Closure::once(move || {
                el.remove();
            });
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.as_ref().unchecked_ref(),
                DUST_LIFETIME_MS,
            );
            remove.forget();
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Dig Site starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("excavationCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize the site
        let seed = js_sys::Date::now() as u64;
        let site = Rc::new(RefCell::new(Site::new(seed)));

        log::info!("Site initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            Vec2::new(SURFACE_WIDTH, SURFACE_HEIGHT),
        )
        .await;
        site.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_pointer_handlers(&canvas, site.clone());
        setup_settings_keys(site.clone());
        setup_panel_close_button();

        // Start redraw loop
        request_animation_frame(site);

        log::info!("Dig Site running!");
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, site: Rc<RefCell<Site>>) {
        // Press: primary button begins the dig and samples immediately
        {
            let site = site.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if event.button() != 0 {
                    return;
                }
                let mut s = site.borrow_mut();
                s.state.begin_excavation();
                let (x, y) = surface_pos(&canvas_clone, &event);
                if s.state.excavate(x, y) {
                    spawn_dust(&event, s.settings.dust_count());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drag: every move while digging is a sample
        {
            let site = site.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut s = site.borrow_mut();
                let (x, y) = surface_pos(&canvas_clone, &event);
                if s.state.excavate(x, y) {
                    spawn_dust(&event, s.settings.dust_count());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Release anywhere on the canvas ends the dig, any button
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                site.borrow_mut().state.end_excavation();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Leaving the canvas also ends the dig
        {
            let site = site.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                site.borrow_mut().state.end_excavation();
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Suppress the context menu so right-click never interrupts a dig
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.prevent_default();
            });
            let _ = canvas
                .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_settings_keys(site: Rc<RefCell<Site>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut s = site.borrow_mut();
            match event.key().as_str() {
                "m" | "M" => {
                    s.settings.reduced_motion = !s.settings.reduced_motion;
                    log::info!("Reduced motion: {}", s.settings.reduced_motion);
                }
                "f" | "F" => {
                    s.settings.show_fps = !s.settings.show_fps;
                    log::info!("FPS counter: {}", s.settings.show_fps);
                }
                "q" | "Q" => {
                    s.settings.quality = match s.settings.quality {
                        QualityPreset::Low => QualityPreset::Medium,
                        QualityPreset::Medium => QualityPreset::High,
                        QualityPreset::High => QualityPreset::Low,
                    };
                    log::info!("Quality: {:?}", s.settings.quality);
                }
                _ => return,
            }
            s.settings.save();
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_panel_close_button() {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("artifactClose") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                if let Some(el) = document.get_element_by_id("artifactInfo") {
                    if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                        let _ = el.style().set_property("display", "none");
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(site: Rc<RefCell<Site>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            site_loop(site, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn site_loop(site: Rc<RefCell<Site>>, time: f64) {
        {
            let mut s = site.borrow_mut();

            // Calculate delta time
            let dt = if s.last_time > 0.0 {
                ((time - s.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            s.last_time = time;

            s.update(dt, time);

            // Surface discoveries made since the last frame
            for event in s.state.drain_events() {
                let SiteEvent::ArtifactDiscovered { index } = event;
                let artifact = &s.state.catalog[index];
                log::info!(
                    "Discovered {} at {:.1}% coverage",
                    artifact.name,
                    s.state.coverage()
                );
                show_artifact_panel(artifact);
            }

            s.render();
            s.update_hud();
        }

        request_animation_frame(site);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_site::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Dig Site (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Scripted dig
    println!("\nRunning scripted dig...");
    scripted_dig();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn scripted_dig() {
    use dig_site::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
    use dig_site::sim::{SiteEvent, SiteState};

    let mut site = SiteState::new(2026, SURFACE_WIDTH, SURFACE_HEIGHT);

    // Trench back and forth across the middle until everything turns up
    let mut x = 0.0;
    while site.artifacts_found < site.catalog.len() as u32 {
        site.excavate_at(x % SURFACE_WIDTH, SURFACE_HEIGHT / 2.0, 60.0);
        x += 40.0;

        for event in site.drain_events() {
            let SiteEvent::ArtifactDiscovered { index } = event;
            let artifact = &site.catalog[index];
            println!(
                "✓ {} ({}, {}) at {:.0}% coverage",
                artifact.name,
                artifact.civilization,
                artifact.period,
                site.coverage()
            );
        }
    }

    println!(
        "Site fully excavated: {} artifacts in {} disks",
        site.artifacts_found,
        site.disks.len()
    );
}
