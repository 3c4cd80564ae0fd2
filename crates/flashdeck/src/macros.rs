#[macro_export]
/// Defines a Yew callback that runs an async block on the browser's task queue.
///
/// Every listed variable is cloned once when the callback is built and again
/// on each invocation, so the spawned future owns its own copies.
///
/// 1. Without an event parameter:
/// ```compile_fail
/// let on_logout = async_callback!([controller] {
///     controller.logout();
/// });
/// ```
///
/// 2. With an event parameter:
/// ```compile_fail
/// let on_create = async_callback!([controller] |fields: RawSetFields| {
///     controller.create_set(fields).await;
/// });
/// ```
///
/// The body runs after the handler has returned, so DOM events that need
/// `prevent_default` must be handled before they reach the callback.
///
/// The expansion refers to `Callback` and `wasm_bindgen_futures`, both of
/// which must resolve at the call site.
macro_rules! async_callback {
    // Version with event parameter
    ([$($var:ident),* $(,)?] |$event:ident : $ty:ty| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event: $ty| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter; must come last, a closure is also an expr
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
