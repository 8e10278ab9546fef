use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use notepad::commands::{commands_in_menu, Menu};
use notepad::effects::{self, Effects, Outcome};
use notepad::messages::{AppMsg, DocumentMsg, EditorMsg, ModalMsg, Msg, UiMsg};
use notepad::model::AppModel;
use notepad::EditorConfig;

use super::dialogs::{RfdDialogs, RfdPicker};
use super::input::{handle_key, KeyInput, Modifiers};
use crate::view::Renderer;

const BLINK_INTERVAL: Duration = Duration::from_millis(500);

pub struct App {
    model: AppModel,
    effects: Effects<RfdPicker, RfdDialogs>,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    /// Messages to run once the window exists (command-line file)
    startup: Vec<Msg>,
    last_tick: Instant,
    modifiers: ModifiersState,
    mouse_position: Option<(f64, f64)>,
}

impl App {
    pub fn new(config: EditorConfig, startup: Vec<Msg>) -> Self {
        let model = AppModel::new(config.window_width, config.window_height, config);

        Self {
            model,
            effects: Effects::new(RfdPicker::default(), RfdDialogs::default()),
            renderer: None,
            window: None,
            context: None,
            startup,
            last_tick: Instant::now(),
            modifiers: ModifiersState::empty(),
            mouse_position: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(self.window_title())
            .with_inner_size(LogicalSize::new(
                self.model.config.window_width,
                self.model.config.window_height,
            ));

        let window = Rc::new(event_loop.create_window(window_attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(Rc::clone(&window), &context, &self.model.config)?;

        let size = window.inner_size();
        self.model
            .set_font_metrics(renderer.char_width(), renderer.line_height());
        self.model.resize(size.width, size.height);

        self.effects.picker.set_parent(Rc::clone(&window));
        self.effects.dialogs.set_parent(Rc::clone(&window));

        self.renderer = Some(renderer);
        self.window = Some(window);
        self.context = Some(context);
        Ok(())
    }

    fn window_title(&self) -> String {
        let marker = if self.model.document.is_modified {
            "*"
        } else {
            ""
        };
        format!("{}{} - Notepad", marker, self.model.document.display_name())
    }

    /// Run a message and everything it triggers, including dialogs
    fn dispatch(&mut self, msg: Msg) -> Outcome {
        let outcome = effects::run(&mut self.model, msg, &mut self.effects);
        if let Some(window) = &self.window {
            window.set_title(&self.window_title());
        }
        outcome
    }

    fn dispatch_all(&mut self, msgs: Vec<Msg>) -> Outcome {
        let mut total = Outcome::default();
        for msg in msgs {
            let outcome = self.dispatch(msg);
            total.redraw |= outcome.redraw;
            total.quit |= outcome.quit;
            if total.quit {
                break;
            }
        }
        total
    }

    fn handle_event(&mut self, event: WindowEvent) -> Outcome {
        match event {
            WindowEvent::Resized(size) => self.dispatch(Msg::resize(size.width, size.height)),
            WindowEvent::CloseRequested => self.dispatch(Msg::App(AppMsg::Quit)),
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                Outcome::default()
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let mods = Modifiers {
                    ctrl: self.modifiers.control_key(),
                    shift: self.modifiers.shift_key(),
                    logo: self.modifiers.super_key(),
                };
                match handle_key(&self.model, &event.logical_key, mods) {
                    KeyInput::Messages(msgs) => self.dispatch_all(msgs),
                    KeyInput::Paste => match read_clipboard() {
                        Some(text) => self.dispatch(Msg::Document(DocumentMsg::InsertText(text))),
                        None => Outcome::default(),
                    },
                    KeyInput::Ignored => Outcome::default(),
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                Outcome::default()
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.handle_click(),
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => (-y * 3.0).round() as i32,
                    MouseScrollDelta::PixelDelta(pos) => {
                        (-pos.y / self.model.line_height.max(1) as f64).round() as i32
                    }
                };
                if lines == 0 {
                    Outcome::default()
                } else {
                    self.dispatch(Msg::Editor(EditorMsg::Scroll(lines)))
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.render(&self.model) {
                        tracing::error!("Render error: {:#}", e);
                    }
                }
                Outcome::default()
            }
            _ => Outcome::default(),
        }
    }

    fn handle_click(&mut self) -> Outcome {
        let (Some((x, y)), Some(renderer)) = (self.mouse_position, &self.renderer) else {
            return Outcome::default();
        };
        if self.model.ui.has_modal() {
            if renderer.is_in_modal(x, y) {
                return Outcome::default();
            }
            return self.dispatch(Msg::modal(ModalMsg::Close));
        }
        if renderer.is_in_status_bar(y) {
            return Outcome::default();
        }
        let (line, column) = renderer.pixel_to_cursor(x, y, &self.model);
        self.dispatch(Msg::Editor(EditorMsg::SetCursorPosition { line, column }))
    }

    fn tick(&mut self) -> Outcome {
        let blink = self.dispatch(Msg::Ui(UiMsg::BlinkCursor));
        let expire = self.dispatch(Msg::Ui(UiMsg::ExpireTransientMessage));
        Outcome {
            redraw: blink.redraw || expire.redraw,
            quit: false,
        }
    }

    fn apply(&self, outcome: Outcome, event_loop: &ActiveEventLoop) {
        if outcome.quit {
            event_loop.exit();
        } else if outcome.redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

fn read_clipboard() -> Option<String> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
        Ok(text) if !text.is_empty() => Some(text),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!("Clipboard unavailable: {}", e);
            None
        }
    }
}

fn log_shortcuts() {
    for menu in [Menu::File, Menu::Edit] {
        for def in commands_in_menu(menu) {
            tracing::debug!(
                "{} > {}: {}",
                menu.label(),
                def.label,
                def.shortcut_label().unwrap_or_default()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            tracing::error!("Failed to initialize window: {:#}", e);
            eprintln!("Error: {:#}", e);
            event_loop.exit();
            return;
        }
        log_shortcuts();

        let startup = std::mem::take(&mut self.startup);
        let mut outcome = self.dispatch_all(startup);
        outcome.redraw = true;
        self.apply(outcome, event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }
        let outcome = self.handle_event(event);
        self.apply(outcome, event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= BLINK_INTERVAL {
            self.last_tick = now;
            let outcome = self.tick();
            self.apply(outcome, event_loop);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_tick + BLINK_INTERVAL));
    }
}
