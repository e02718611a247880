//! Server-Rendered Buttons
//!
//! Attaches like listeners to buttons that already exist in the page.
//! Binding is scoped to one root element rather than the whole document.

use like_handler::{LikeHandler, LikeTransport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

/// Bind every element under `root` matching the configured selector
///
/// Only elements present at call time are bound. Returns how many were bound.
pub fn bind_like_buttons<T>(root: &Element, handler: &LikeHandler<T>) -> Result<usize, JsValue>
where
    T: LikeTransport + 'static,
{
    let config = handler.config();
    let nodes = root.query_selector_all(&config.selector)?;

    let mut bound = 0;
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        bind_button(element, handler.clone())?;
        bound += 1;
    }

    tracing::info!(selector = %config.selector, "bound {bound} like buttons");
    Ok(bound)
}

fn bind_button<T>(element: Element, handler: LikeHandler<T>) -> Result<(), JsValue>
where
    T: LikeTransport + 'static,
{
    let target = element.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        // Read at click time so later attribute changes are honored
        let treasure_id = target.get_attribute(&handler.config().id_attribute);
        spawn_local(handler.click(&ev, treasure_id, target.clone()));
    });

    element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // Listener lives as long as the page
    on_click.forget();
    Ok(())
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use like_handler::{LikeConfig, LikeError};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::{Document, EventInit};

    /// Answers every request with a fixed body and records the urls
    #[derive(Clone, Default)]
    struct FixedTransport {
        urls: Rc<RefCell<Vec<String>>>,
    }

    impl LikeTransport for FixedTransport {
        async fn get(&self, url: &str) -> Result<String, LikeError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok("5".to_string())
        }
    }

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn button(document: &Document, id: &str) -> Element {
        let button = document.create_element("button").unwrap();
        button.set_attribute("data-id", id).unwrap();
        button.set_text_content(Some("Like"));
        button
    }

    /// Dispatch a cancelable click, returning whether the default was prevented
    fn click(element: &Element) -> bool {
        let init = EventInit::new();
        init.set_cancelable(true);
        let ev = Event::new_with_event_init_dict("click", &init).unwrap();
        element.dispatch_event(&ev).unwrap();
        ev.default_prevented()
    }

    struct Page {
        root: Element,
        inside: Vec<Element>,
        outside: Element,
    }

    fn page() -> Page {
        let document = document();
        let body = document.body().unwrap();

        let root = document.create_element("div").unwrap();
        let inside = vec![button(&document, "1"), button(&document, "2")];
        for button in &inside {
            root.append_child(button).unwrap();
        }
        let outside = button(&document, "3");
        body.append_child(&root).unwrap();
        body.append_child(&outside).unwrap();

        Page { root, inside, outside }
    }

    fn handler() -> (FixedTransport, LikeHandler<FixedTransport>) {
        let transport = FixedTransport::default();
        (transport.clone(), LikeHandler::new(transport, LikeConfig::default()))
    }

    #[wasm_bindgen_test]
    fn test_binds_only_under_root() {
        let page = page();
        let (_, handler) = handler();

        assert_eq!(bind_like_buttons(&page.root, &handler).unwrap(), 2);
        assert!(click(&page.inside[0]));
        assert!(!click(&page.outside));
    }

    #[wasm_bindgen_test]
    fn test_button_added_after_binding_is_not_bound() {
        let page = page();
        let (transport, handler) = handler();
        bind_like_buttons(&page.root, &handler).unwrap();

        let late = button(&document(), "4");
        page.root.append_child(&late).unwrap();

        assert!(!click(&late));
        assert!(transport.urls.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_click_prevents_default_and_shows_count() {
        let page = page();
        let (transport, handler) = handler();
        bind_like_buttons(&page.root, &handler).unwrap();

        assert!(click(&page.inside[1]));
        TimeoutFuture::new(0).await;

        assert_eq!(*transport.urls.borrow(), vec!["/like_treasure/?treasure_id=2"]);
        assert_eq!(page.inside[1].text_content().as_deref(), Some("Likes: 5"));
        assert_eq!(page.inside[0].text_content().as_deref(), Some("Like"));
    }

    #[wasm_bindgen_test]
    async fn test_id_read_at_click_time() {
        let page = page();
        let (transport, handler) = handler();
        bind_like_buttons(&page.root, &handler).unwrap();

        page.inside[0].set_attribute("data-id", "99").unwrap();
        click(&page.inside[0]);
        page.inside[1].remove_attribute("data-id").unwrap();
        click(&page.inside[1]);
        TimeoutFuture::new(0).await;

        assert_eq!(
            *transport.urls.borrow(),
            vec!["/like_treasure/?treasure_id=99", "/like_treasure/?treasure_id="]
        );
    }
}
