use crate::events::{handle_window_input, InputOutcome};
use crate::input::PageScroll;
use crate::render::LogRenderer;
use crate::tween::Tweener;
use anim_core::FrameDriver;
use winit::event::WindowEvent;

/// Everything the event loop closure owns between callbacks.
pub struct FrameContext {
    pub driver: FrameDriver,
    pub tweens: Tweener,
    pub renderer: LogRenderer,
    pub page: PageScroll,
}

impl FrameContext {
    pub fn new(driver: FrameDriver, renderer: LogRenderer) -> Self {
        Self {
            driver,
            tweens: Tweener::new(),
            renderer,
            page: PageScroll::default(),
        }
    }

    /// Route a window event. Returns false when the loop should stop.
    pub fn handle(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CloseRequested => false,
            WindowEvent::RedrawRequested => {
                self.frame();
                true
            }
            _ => handle_window_input(event, &mut self.driver, &mut self.page) != InputOutcome::Exit,
        }
    }

    pub fn frame(&mut self) {
        self.driver.tick(&mut self.tweens, &mut self.renderer);
    }
}
