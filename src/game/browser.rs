//! Browser glue: canvas lookup, keyboard listeners and the animation-frame loop.
//! All simulation happens in [`World::tick`]; this file only feeds it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, window};

use super::{Bounds, InputTracker, World, draw_world};
use crate::config::{CANVAS_ID, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, GameConfig};
use crate::error::GameError;

struct GameState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    world: World,
    input: InputTracker,
}

thread_local! {
    static GAME_STATE: RefCell<Option<GameState>> = const { RefCell::new(None) };
    static LOOP_STARTED: Cell<bool> = const { Cell::new(false) };
}

/// True for the first caller only; listeners and the frame loop are installed once per page.
fn claim_loop() -> bool {
    !LOOP_STARTED.with(|started| started.replace(true))
}

/// Attach to (or create) the game canvas, install input listeners and start the loop.
/// Calling it again swaps in a fresh world built from `config` and keeps the running loop.
pub fn start_game_mode(config: GameConfig) -> Result<(), GameError> {
    config.validate()?;
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(CANVAS_ID) {
        el.dyn_into().map_err(|_| GameError::Js(format!("#{CANVAS_ID} is not a canvas")))?
    } else {
        let c: HtmlCanvasElement = doc
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| GameError::Js("created element is not a canvas".into()))?;
        c.set_id(CANVAS_ID);
        c.set_width(DEFAULT_CANVAS_WIDTH);
        c.set_height(DEFAULT_CANVAS_HEIGHT);
        doc.body().ok_or(GameError::NoBody)?.append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()
        .map_err(|_| GameError::NoContext)?;

    let world = World::new(config, canvas_bounds(&canvas));
    log::info!(
        "skyhop started on {}x{} canvas",
        canvas.width(),
        canvas.height()
    );
    GAME_STATE.with(|s| {
        s.replace(Some(GameState {
            canvas,
            ctx,
            world,
            input: InputTracker::new(),
        }));
    });

    if !claim_loop() {
        log::info!("frame loop already running, world replaced");
        return Ok(());
    }
    install_key_listener("keydown", InputTracker::key_down)?;
    install_key_listener("keyup", InputTracker::key_up)?;
    start_frame_loop();
    Ok(())
}

fn canvas_bounds(canvas: &HtmlCanvasElement) -> Bounds {
    Bounds::new(canvas.width() as f64, canvas.height() as f64)
}

/// Route `event_name` key events into the tracker for the program lifetime.
fn install_key_listener(
    event_name: &str,
    apply: fn(&mut InputTracker, &str) -> bool,
) -> Result<(), GameError> {
    let win = window().ok_or(GameError::NoWindow)?;
    let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        let code = evt.code();
        let handled = GAME_STATE.with(|cell| {
            cell.borrow_mut()
                .as_mut()
                .map(|state| apply(&mut state.input, &code))
                .unwrap_or(false)
        });
        // Keep Space and the arrows from scrolling the page.
        if handled {
            evt.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        GAME_STATE.with(|state_cell| {
            if let Some(state) = state_cell.borrow_mut().as_mut() {
                frame(state, ts);
            }
        });
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(callback: &FrameCallback) {
    let Some(w) = window() else { return };
    if let Some(cb) = callback.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn frame(state: &mut GameState, now_ms: f64) {
    state.world.resize(canvas_bounds(&state.canvas));
    let input = state.input.snapshot();
    state.world.tick(&input, now_ms);
    draw_world(&state.world, &mut state.ctx);
}
