use portfolio::PageConfig;
use portfolio::behaviors::typing::TypingEffect;
use web_sys::HtmlElement;
use zoon::{Task, Timer};

use crate::dom::timer_ms;

/// Types out `target`'s text once, starting after the configured delay.
pub fn start(target: HtmlElement, config: &PageConfig) {
    let start_delay = timer_ms(config.typing_start_delay_ms);
    let interval = timer_ms(config.typing_interval_ms);
    Task::start(async move {
        Timer::sleep(start_delay).await;

        let text = target.text_content().unwrap_or_default();
        target.set_text_content(Some(""));
        let _ = target.style().set_property("opacity", "1");

        let mut typing = TypingEffect::new();
        if !typing.start(&text) {
            return;
        }
        loop {
            Timer::sleep(interval).await;
            let Some(frame) = typing.tick() else {
                break;
            };
            target.set_text_content(Some(&frame.text));
            if frame.is_last {
                break;
            }
        }
    });
}
