use gloo_events::EventListener;
use yew::prelude::*;

use flashdeck::status::Connectivity;

/// Reports the window's `online`/`offline` events for as long as the
/// component is mounted.
#[hook]
pub fn use_connectivity(on_change: Callback<Connectivity>) {
    use_effect_with((), move |_| {
        let listeners = web_sys::window().map(|window| {
            let online = {
                let on_change = on_change.clone();
                EventListener::new(&window, "online", move |_| {
                    on_change.emit(Connectivity::Online);
                })
            };
            let offline = EventListener::new(&window, "offline", move |_| {
                on_change.emit(Connectivity::Offline);
            });
            (online, offline)
        });

        move || drop(listeners)
    });
}
