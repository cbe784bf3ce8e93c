// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use tweenvis::{
    config::*,
    controllers::{
        parse_growth_fields, parse_tween_fields, OscController, OscSender, Scene, SketchCommand,
    },
    services::FrameClock,
    views::{shape_from_config, Button, ButtonConfig, DrawStyle, Drawable, GrowthPanel, TweenPanel},
};

struct Model {
    // Core components:
    shape: Box<dyn Drawable>,
    scene: Scene,

    // UI components:
    tween_scene_button: Button,
    growth_scene_button: Button,
    tween_panel: TweenPanel,
    growth_panel: GrowthPanel,

    // Comms components:
    osc_controller: OscController,
    osc_sender: OscSender,

    // Timing:
    clock: FrameClock,

    // Style:
    background_color: Rgb,

    // Trigger defaults for the keyboard shortcuts:
    tween_defaults: TweenDefaults,
    growth_defaults: GrowthDefaults,

    // FPS
    last_update: Instant,
    fps: f32,

    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create OSC endpoints
    let osc_controller =
        OscController::new(config.osc.rx_port).expect("Failed to create OSC Controller");
    let osc_sender = OscSender::new(config.osc.rx_port).expect("Failed to create OSC Sender");

    // Create window
    app.new_window()
        .title("tweenvis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    // The shape under animation
    let style = DrawStyle::from_config(&config.style);
    let shape = shape_from_config(&config.shape, style);

    // Lay the controls out against the window edges
    let half_width = config.window.width as f32 / 2.0;
    let half_height = config.window.height as f32 / 2.0;

    let mut tween_scene_button = Button::new(ButtonConfig {
        label: "tween".to_string(),
        position: pt2(-half_width + 75.0, half_height - 35.0),
        ..Default::default()
    });
    tween_scene_button.is_selected = true;

    let growth_scene_button = Button::new(ButtonConfig {
        label: "grow".to_string(),
        position: pt2(-half_width + 195.0, half_height - 35.0),
        ..Default::default()
    });

    let panel_origin = pt2(-half_width + 80.0, -half_height + 50.0);
    let tween_panel = TweenPanel::new(panel_origin, &config.animation.tween);
    let growth_panel = GrowthPanel::new(panel_origin, &config.animation.growth);

    let [r, g, b] = config.style.background_color;

    Model {
        shape,
        scene: Scene::Tween,

        tween_scene_button,
        growth_scene_button,
        tween_panel,
        growth_panel,

        osc_controller,
        osc_sender,

        clock: FrameClock::new(),

        background_color: rgb(r, g, b),

        tween_defaults: config.animation.tween.clone(),
        growth_defaults: config.animation.growth.clone(),

        // FPS
        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    // Process OSC messages
    model.osc_controller.process_messages();

    // One clock read per update; everything below sees the same "now"
    let now_ms = model.clock.now_ms();
    for command in model.osc_controller.take_commands() {
        apply_command(model, command, now_ms);
    }

    /********************* Main update for the shape **********************/
    model.shape.body_mut().update(now_ms);
    /*********************************************************************/
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background_color);

    model.shape.draw(&draw);

    model.tween_scene_button.draw(&draw);
    model.growth_scene_button.draw(&draw);
    match model.scene {
        Scene::Tween => model.tween_panel.draw(&draw),
        Scene::Growth => model.growth_panel.draw(&draw),
    }

    if model.debug_flag {
        // Draw (+,+) axes
        draw.line()
            .points(pt2(0.0, 0.0), pt2(50.0, 0.0))
            .color(RED)
            .stroke_weight(1.0);
        draw.line()
            .points(pt2(0.0, 0.0), pt2(0.0, 50.0))
            .color(BLUE)
            .stroke_weight(1.0);

        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(0.0, -20.0)
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}

// ******************************* Input routing *****************************

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // a focused text field captures keystrokes first
    let consumed = match model.scene {
        Scene::Tween => model.tween_panel.handle_key(key),
        Scene::Growth => model.growth_panel.handle_key(key),
    };
    if consumed {
        return;
    }

    match key {
        // scene shortcuts loop back through OSC
        Key::Key1 => model.osc_sender.send_select_scene(Scene::Tween),
        Key::Key2 => model.osc_sender.send_select_scene(Scene::Growth),
        Key::T => {
            let d = &model.tween_defaults;
            model.osc_sender.send_tween(d.target_x, d.target_y, d.duration);
        }
        Key::G => {
            let d = &model.growth_defaults;
            model.osc_sender.send_grow(d.max_scale, d.duration);
        }
        Key::Space => model.osc_sender.send_reset(),
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let position = app.mouse.position();
    let now_ms = model.clock.now_ms();

    // Scene switch buttons
    if model.tween_scene_button.contains(position) {
        apply_command(model, SketchCommand::SelectScene { scene: Scene::Tween }, now_ms);
        return;
    }
    if model.growth_scene_button.contains(position) {
        apply_command(model, SketchCommand::SelectScene { scene: Scene::Growth }, now_ms);
        return;
    }

    // Active panel: focus handling, and maybe a trigger
    let go = match model.scene {
        Scene::Tween => model.tween_panel.handle_press(position),
        Scene::Growth => model.growth_panel.handle_press(position),
    };
    if !go {
        return;
    }

    let parsed = match model.scene {
        Scene::Tween => parse_tween_fields(
            model.tween_panel.x_field.value(),
            model.tween_panel.y_field.value(),
            model.tween_panel.duration_field.value(),
        ),
        Scene::Growth => parse_growth_fields(
            model.growth_panel.scale_field.value(),
            model.growth_panel.duration_field.value(),
        ),
    };

    match parsed {
        Ok(command) => apply_command(model, command, now_ms),
        Err(e) => println!("Ignoring trigger: {}", e),
    }
}

// ******************************* Command launcher **************************

fn apply_command(model: &mut Model, command: SketchCommand, now_ms: f64) {
    match command {
        SketchCommand::StartTween { x, y, duration } => {
            model.shape.body_mut().start_tween(pt2(x, y), duration, now_ms);
        }
        SketchCommand::StartGrowth { max_scale, duration } => {
            model.shape.body_mut().start_growth(max_scale, duration, now_ms);
        }
        SketchCommand::SelectScene { scene } => select_scene(model, scene),
        SketchCommand::ResetShape => model.shape.body_mut().reset(),
    }
}

fn select_scene(model: &mut Model, scene: Scene) {
    model.scene = scene;
    model.tween_scene_button.is_selected = scene == Scene::Tween;
    model.growth_scene_button.is_selected = scene == Scene::Growth;

    // no stale focus rings on the hidden panel
    model.tween_panel.clear_focus();
    model.growth_panel.clear_focus();
}
