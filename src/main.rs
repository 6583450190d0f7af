//! Jump Compare entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Element};

    use jump_compare::AnimationDriver;
    use jump_compare::controller::ControllerBinding;
    use jump_compare::error::SetupError;
    use jump_compare::renderer;
    use jump_compare::sim::{BallisticJump, KinematicJump};

    /// Everything the page needs: both simulations, the frame driver, the
    /// canvas contexts, and the optional info panels. The pending
    /// requestAnimationFrame handle lives here so stopping the driver can
    /// cancel an in-flight callback.
    struct App {
        sim_a: KinematicJump,
        sim_b: BallisticJump,
        driver: AnimationDriver,
        frame_id: Option<i32>,
        ctx_a: CanvasRenderingContext2d,
        ctx_b: CanvasRenderingContext2d,
        info_a: Option<Element>,
        info_b: Option<Element>,
        /// Kept alive so the button listeners stay registered
        _controls: Option<ControllerBinding>,
    }

    impl App {
        /// Advance both simulations by one frame and redraw
        fn step(&mut self, dt: f32) {
            self.sim_a.update(dt);
            self.sim_b.update(dt);
            self.render();
            self.update_info_panels();
        }

        fn render(&self) {
            renderer::render_simulations(&self.ctx_a, &self.ctx_b, &self.sim_a, &self.sim_b);
        }

        fn update_info_panels(&self) {
            renderer::render_info(
                self.info_a.as_ref(),
                &[
                    format!("y: {:.1} px", self.sim_a.position.y),
                    format!("ascending: {}", yes_no(self.sim_a.is_jumping())),
                    format!("descending: {}", yes_no(self.sim_a.is_falling())),
                ],
            );
            renderer::render_info(
                self.info_b.as_ref(),
                &[
                    format!("y: {:.1} px", self.sim_b.position.y),
                    format!("vy: {:.1} px/s", self.sim_b.velocity.y),
                    format!("grounded: {}", yes_no(self.sim_b.is_grounded())),
                ],
            );
        }
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag { "yes" } else { "no" }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }

    /// Start the driver and schedule the first frame (no-op while running)
    fn start_loop(app: &Rc<RefCell<App>>) {
        let now = now_ms();
        if app.borrow_mut().driver.start(now) {
            schedule_frame(app);
        }
    }

    /// Stop the driver and cancel the pending frame so a stray late
    /// callback cannot resume the loop
    fn stop_loop(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        if a.driver.stop() {
            if let Some(id) = a.frame_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
        }
    }

    fn schedule_frame(app: &Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let cb_app = app.clone();
        let closure = Closure::once(move |time: f64| {
            frame(cb_app, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().frame_id = Some(id),
            Err(_) => log::error!("Failed to schedule animation frame"),
        }
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        let dt = {
            let mut a = app.borrow_mut();
            a.frame_id = None;
            a.driver.frame(time)
        };
        // Driver stopped since this frame was scheduled: suspend for good
        let Some(dt) = dt else {
            return;
        };

        app.borrow_mut().step(dt);
        schedule_frame(&app);
    }

    /// Pause the loop while the tab is hidden, resume when visible again
    fn setup_visibility_pause(app: Rc<RefCell<App>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                stop_loop(&app);
                log::info!("Animation paused (tab hidden)");
            } else {
                start_loop(&app);
                log::info!("Animation resumed (tab visible)");
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Jump Compare starting...");

        let ctx_a = match renderer::get_canvas_context("canvas-a") {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("Startup failed: {e}");
                return;
            }
        };
        let ctx_b = match renderer::get_canvas_context("canvas-b") {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("Startup failed: {e}");
                return;
            }
        };

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("Startup failed: {}", SetupError::DocumentUnavailable);
            return;
        };

        // Info panels are optional; missing ones are skipped at render time
        let info_a = document.get_element_by_id("info-a");
        let info_b = document.get_element_by_id("info-b");

        let app = Rc::new(RefCell::new(App {
            sim_a: KinematicJump::new(),
            sim_b: BallisticJump::new(),
            driver: AnimationDriver::new(),
            frame_id: None,
            ctx_a,
            ctx_b,
            info_a,
            info_b,
            _controls: None,
        }));

        // Draw the resting scene before the first frame fires
        {
            let a = app.borrow();
            a.render();
            a.update_info_panels();
        }

        let jump_app = app.clone();
        let reset_app = app.clone();
        let controls = ControllerBinding::bind(
            move || {
                let mut a = jump_app.borrow_mut();
                a.sim_a.start_jump();
                a.sim_b.start_jump();
            },
            move || {
                let mut a = reset_app.borrow_mut();
                a.sim_a.reset();
                a.sim_b.reset();
                a.render();
                a.update_info_panels();
            },
        );
        match controls {
            Ok(controls) => app.borrow_mut()._controls = Some(controls),
            Err(e) => {
                log::error!("Startup failed: {e}");
                return;
            }
        }

        setup_visibility_pause(app.clone());

        start_loop(&app);

        log::info!("Jump Compare running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Jump Compare (native) starting...");
    log::info!("Headless mode - run with `trunk serve` for the web version");

    println!("\nRunning headless jump comparison...");
    run_headless_comparison();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive both models through one full jump at a fixed step and report where
/// each one turned around and when it landed
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_comparison() {
    use jump_compare::consts::{GROUND_CONTACT_Y, GROUND_Y};
    use jump_compare::sim::{BallisticJump, KinematicJump, KinematicPhase};

    let dt = 1.0 / 120.0;
    let mut sim_a = KinematicJump::new();
    let mut sim_b = BallisticJump::new();
    sim_a.start_jump();
    sim_b.start_jump();

    let mut apex_a = sim_a.position.y;
    let mut apex_b = sim_b.position.y;
    let mut elapsed = 0.0f32;

    while elapsed < 5.0 && !(sim_a.phase == KinematicPhase::Grounded && sim_b.is_grounded()) {
        sim_a.update(dt);
        sim_b.update(dt);
        apex_a = apex_a.min(sim_a.position.y);
        apex_b = apex_b.min(sim_b.position.y);
        elapsed += dt;
    }

    assert_eq!(
        sim_a.position.y, GROUND_CONTACT_Y,
        "kinematic jump should settle on the ground"
    );
    assert!(sim_b.is_grounded(), "ballistic jump should settle on the ground");

    println!(
        "✓ Both jumps landed after {elapsed:.2}s: kinematic apex {:.1} px, ballistic apex {:.1} px above ground",
        GROUND_Y - apex_a,
        GROUND_Y - apex_b,
    );
}
