//! End-to-end render flow against stub hosts
//!
//! Exercises the full path: defaults merge, alias finalization, registry
//! memoization, instance construction, and opaque error pass-through.

use offstage_env::Environment;
use offstage_host::{HostDescriptor, RenderOptions};
use offstage_render::{HostRenderExt, RenderError, Renderer, RendererRegistry};
use offstage_test_utils::{echo_host, BrokenHost, ConstructionRefused, MissingTemplateError};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn renders_a_template_with_locals() {
    let renderer = Renderer::new(echo_host(), Environment::new());
    let out = renderer
        .render(RenderOptions::new().template("greeting").local("name", "Ada"))
        .expect("render");
    assert_eq!(out, "Hello, Ada");
}

#[test]
fn host_convenience_forwards_to_the_cached_facade() {
    let host = echo_host();
    let out = host
        .render(RenderOptions::new().template("greeting"))
        .expect("render");
    assert_eq!(out, "Hello, world");
    assert!(Arc::ptr_eq(&host.renderer(), &host.renderer()));
}

#[test]
fn custom_environment_reaches_the_bound_request() {
    let overrides: Environment = [
        ("method", "post"),
        ("http_host", "internal.test"),
        ("https", "true"),
    ]
    .into_iter()
    .collect();
    let renderer = Renderer::new(echo_host(), overrides);
    let out = renderer
        .render(RenderOptions::new().template("request_line"))
        .expect("render");
    assert_eq!(out, "POST internal.test secure=true");
}

#[test]
fn for_host_returns_the_same_facade_every_time() {
    let host: Arc<dyn HostDescriptor> = echo_host();
    let first = Renderer::for_host(&host);
    let second = Renderer::for_host(&host);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn unbound_facade_reports_missing_host() {
    let renderer = Renderer::unbound(Environment::new());
    match renderer.render(RenderOptions::new().template("greeting")) {
        Err(RenderError::MissingHost) => {}
        other => panic!("expected MissingHost, got {other:?}"),
    }
}

#[test]
fn rendering_errors_pass_through_unwrapped() {
    let renderer = Renderer::new(echo_host(), Environment::new());
    let err = renderer
        .render(RenderOptions::new().template("no-such-template"))
        .expect_err("missing template");
    let inner = err.host_error().expect("host error");
    let missing = inner
        .downcast_ref::<MissingTemplateError>()
        .expect("original error type");
    assert_eq!(missing.0, "no-such-template");
}

#[test]
fn construction_errors_pass_through_unwrapped() {
    let renderer = Renderer::new(Arc::new(BrokenHost::new()), Environment::new());
    let err = renderer
        .render(RenderOptions::new().template("greeting"))
        .expect_err("broken host");
    assert!(err
        .host_error()
        .is_some_and(|e| e.downcast_ref::<ConstructionRefused>().is_some()));
}

#[test]
fn concurrent_obtain_builds_the_facade_once() {
    const WORKERS: usize = 16;

    let host = echo_host();
    let dyn_host: Arc<dyn HostDescriptor> = host.clone();
    let registry = Arc::new(RendererRegistry::new());
    let barrier = Arc::new(Barrier::new(WORKERS));

    let workers: Vec<_> = (0..WORKERS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let host = Arc::clone(&dyn_host);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.obtain(&host)
            })
        })
        .collect();

    let facades: Vec<_> = workers
        .into_iter()
        .map(|w| w.join().expect("worker"))
        .collect();

    for facade in &facades[1..] {
        assert!(Arc::ptr_eq(&facades[0], facade));
    }
    // defaults were computed by exactly one facade construction
    assert_eq!(host.defaults_calls(), 1);
}
