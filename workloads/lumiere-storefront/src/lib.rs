//! Lumière storefront - streaming SSR for the home carousel, collection
//! pages and font theming.
//!
//! Routes:
//! - `/` hero carousel; state and input travel in the query string
//! - `/collections/:kind` filtered, sorted product grid
//! - `/font` applies a font preset and redirects back

mod config;
mod data;
mod pages;
mod routes;
mod scripts;
mod sections;
mod shell;

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use lumiere_sdk::lumiere_core::{
    Method as RequestMethod, RequestContext, RouteMatch, StorefrontConfig, ThemeSettings,
    WorkloadError,
};
use lumiere_sdk::lumiere_observability::StructuredLogger;
use lumiere_sdk::lumiere_streaming::StreamingSink;
use lumiere_sdk::lumiere_theme::{DocumentStyle, FontSelector};

use config::storefront_config;
use pages::{
    apply_font, font_preference, safe_return, write_page, CollectionView, HomeView, Page,
    RequestFontProvider,
};
use scripts::HOME_SCRIPT;
use sections::{
    render_collection_filters, render_collection_hero, render_cta, render_font_selector,
    render_header, render_hero, render_not_found, render_product_grid,
};
use shell::create_shell;

const WORKLOAD: &str = "lumiere-storefront";

/// Storefront request handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    let (config, config_err) = storefront_config();

    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let method = method_name(&req.method());
    let mut ctx = RequestContext::new(
        RequestMethod::parse(&method).unwrap_or(RequestMethod::Get),
        path,
    );
    let cookies: Vec<String> = req
        .headers()
        .get(&"cookie".to_string())
        .iter()
        .map(|v| String::from_utf8_lossy(v).into_owned())
        .collect();
    if !cookies.is_empty() {
        ctx = ctx.with_header("cookie", cookies.join("; "));
    }

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_settings(&config.logging)
        .with_workload(WORKLOAD)
        .with_route(ctx.path.clone());

    if let Some(e) = config_err {
        logger
            .warn_builder("storefront.toml invalid, using defaults")
            .field("error", e.to_string())
            .emit();
    }

    // Every page is a read; anything else is refused before routing.
    if method != "GET" {
        logger
            .info_builder("method not allowed")
            .field("method", method)
            .emit();
        send_empty(response_out, 405, &[("allow", "GET")], &logger);
        return;
    }

    let manifest = routes::manifest();
    let page = match manifest.resolve("GET", &ctx.path) {
        RouteMatch::Found(route, params) => {
            let handler = route.handler.clone();
            ctx = ctx.with_params(params);
            match handler.as_str() {
                routes::HOME => home_page(&ctx, &config, &logger),
                routes::COLLECTION => Ok(collection_page(&ctx, &config, &logger)),
                routes::FONT => {
                    font_redirect(&ctx, &config.theme, response_out, &logger);
                    return;
                }
                _ => Ok(not_found_page(&ctx, &config, &logger)),
            }
        }
        RouteMatch::MethodNotAllowed => {
            send_empty(response_out, 405, &[("allow", "GET")], &logger);
            return;
        }
        RouteMatch::NotFound => Ok(not_found_page(&ctx, &config, &logger)),
    };

    let page = match page {
        Ok(page) => page,
        Err(e) => {
            logger.error_builder("page build failed").field("error", e.to_string()).emit();
            send_empty(response_out, 500, &[], &logger);
            return;
        }
    };

    if let Err(e) = stream_page(&ctx, &page, response_out, &logger).await {
        logger.error_builder("stream failed").field("error", e.to_string()).emit();
    }
}

fn method_name(method: &Method) -> String {
    match method {
        Method::Get => "GET".to_string(),
        Method::Head => "HEAD".to_string(),
        Method::Post => "POST".to_string(),
        Method::Put => "PUT".to_string(),
        Method::Delete => "DELETE".to_string(),
        Method::Connect => "CONNECT".to_string(),
        Method::Options => "OPTIONS".to_string(),
        Method::Trace => "TRACE".to_string(),
        Method::Patch => "PATCH".to_string(),
        Method::Other(other) => other.to_ascii_uppercase(),
    }
}

/// Font state rendered into one page.
struct Theming {
    style: DocumentStyle,
    selector_html: String,
    set_cookies: Vec<String>,
}

/// Restore the font preference inside a provider scope and render the
/// selector. A preference that cannot be restored leaves the page on the
/// stylesheet defaults with no selector.
fn page_theming(
    ctx: &RequestContext,
    theme: &ThemeSettings,
    open: bool,
    toggle_href: &str,
    return_to: &str,
    logger: &StructuredLogger,
) -> Theming {
    let provider = match font_preference(ctx, theme) {
        Ok(preference) => RequestFontProvider::new(preference),
        Err(e) => {
            logger
                .warn_builder("font preference unavailable")
                .field("error", e.to_string())
                .emit();
            RequestFontProvider::empty()
        }
    };

    let selector_html = match provider.use_font() {
        Ok(preference) => {
            logger
                .debug_builder("font restored")
                .field("font", preference.current().id.as_str())
                .emit();
            let selector = FontSelector::with_open(open);
            render_font_selector(
                &selector.entries(preference),
                selector.is_open(),
                toggle_href,
                return_to,
            )
        }
        Err(_) => String::new(),
    };

    match provider.into_inner() {
        Some(preference) => {
            let (mut store, style) = preference.into_parts();
            Theming {
                style,
                selector_html,
                set_cookies: store.take_set_cookie_headers(),
            }
        }
        None => Theming {
            style: DocumentStyle::new(),
            selector_html,
            set_cookies: Vec::new(),
        },
    }
}

fn collections_href(config: &StorefrontConfig) -> String {
    format!("/collections/{}", config.collection.default_kind)
}

fn home_page(
    ctx: &RequestContext,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> Result<Page, WorkloadError> {
    let view = HomeView::from_request(ctx, &config.carousel)
        .map_err(|e| WorkloadError::Render(e.to_string()))?;

    let theming = page_theming(
        ctx,
        &config.theme,
        view.fonts_open,
        &view.fonts_href(),
        &view.state_href(),
        logger,
    );

    logger
        .info_builder("home rendered")
        .field_u64("slide", view.engine.active_index() as u64)
        .field("direction", view.engine.direction().as_str())
        .field_bool("moved", view.outgoing.is_some())
        .emit();

    let shell = create_shell("Ceylon Gems & Fine Jewelry", &theming.style, HOME_SCRIPT);
    Ok(Page::new(200, shell)
        .with_section(
            "header",
            render_header(&collections_href(config), &theming.selector_html),
        )
        .with_section(
            "hero",
            render_hero(
                &view,
                config.carousel.autoplay_interval_ms,
                config.carousel.slide_offset,
            ),
        )
        .with_set_cookies(theming.set_cookies))
}

fn collection_page(
    ctx: &RequestContext,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> Page {
    let view = CollectionView::from_request(ctx);
    let results = view.results();

    let fonts_open = ctx.query_param("fonts") == Some("open");
    let return_to = view.href();
    let toggle_href = if fonts_open {
        return_to.clone()
    } else {
        with_flag(&return_to, "fonts=open")
    };
    let theming = page_theming(ctx, &config.theme, fonts_open, &toggle_href, &return_to, logger);

    logger
        .info_builder("collection rendered")
        .field("kind", view.catalog.kind().as_str())
        .field("category", view.query.category.as_value())
        .field("sort", view.query.order.as_value())
        .field_u64("items", results.len() as u64)
        .emit();

    let shell = create_shell(view.copy.title, &theming.style, "");
    Page::new(200, shell)
        .with_section(
            "header",
            render_header(&collections_href(config), &theming.selector_html),
        )
        .with_section("collection-hero", render_collection_hero(&view.copy))
        .with_section(
            "filters",
            render_collection_filters(&view, &results.count_label()),
        )
        .with_section("products", render_product_grid(&results))
        .with_section("cta", render_cta(&data::EXPERT_CTA))
        .with_set_cookies(theming.set_cookies)
}

fn not_found_page(
    ctx: &RequestContext,
    config: &StorefrontConfig,
    logger: &StructuredLogger,
) -> Page {
    logger.info_builder("not found").field("path", ctx.path.as_str()).emit();

    let theming = page_theming(ctx, &config.theme, false, "/?fonts=open", "/", logger);
    let shell = create_shell("Not Found", &theming.style, "");
    Page::new(404, shell)
        .with_section(
            "header",
            render_header(&collections_href(config), &theming.selector_html),
        )
        .with_section("not-found", render_not_found(&ctx.path))
        .with_set_cookies(theming.set_cookies)
}

fn with_flag(href: &str, flag: &str) -> String {
    if href.contains('?') {
        format!("{}&{}", href, flag)
    } else {
        format!("{}?{}", href, flag)
    }
}

fn font_redirect(
    ctx: &RequestContext,
    theme: &ThemeSettings,
    response_out: ResponseOutparam,
    logger: &StructuredLogger,
) {
    let (location, set_cookies) = match apply_font(ctx, theme) {
        Ok(redirect) => {
            logger
                .info_builder("font selected")
                .field("font", redirect.font_id.as_str())
                .field("change", format!("{:?}", redirect.change))
                .emit();
            (redirect.location, redirect.set_cookies)
        }
        Err(e) => {
            logger
                .warn_builder("font selection failed")
                .field("error", e.to_string())
                .emit();
            (safe_return(ctx.query_param("return")), Vec::new())
        }
    };

    let mut headers = vec![("location", location.as_str()), ("cache-control", "no-store")];
    headers.extend(set_cookies.iter().map(|c| ("set-cookie", c.as_str())));
    send_empty(response_out, 303, &headers, logger);
}

/// Start a response with `status` and `headers`, returning its body.
fn start_response(
    response_out: ResponseOutparam,
    status: u16,
    headers: &[(&str, &str)],
) -> Result<impl futures::Sink<Vec<u8>, Error = impl std::fmt::Display> + Unpin, WorkloadError> {
    let header_list: Vec<(String, Vec<u8>)> = headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.as_bytes().to_vec()))
        .collect();
    let fields = Fields::from_list(&header_list)
        .map_err(|e| WorkloadError::StreamError(format!("invalid headers: {:?}", e)))?;
    let response = OutgoingResponse::new(fields);
    response
        .set_status_code(status)
        .map_err(|_| WorkloadError::StreamError(format!("invalid status {}", status)))?;

    let body = response.take_body();
    response_out.set(response);
    Ok(body)
}

fn send_empty(
    response_out: ResponseOutparam,
    status: u16,
    headers: &[(&str, &str)],
    logger: &StructuredLogger,
) {
    if let Err(e) = start_response(response_out, status, headers) {
        logger.error_builder("response failed").field("error", e.to_string()).emit();
    }
}

async fn stream_page(
    ctx: &RequestContext,
    page: &Page,
    response_out: ResponseOutparam,
    logger: &StructuredLogger,
) -> Result<(), WorkloadError> {
    let request_id = ctx.request_id.to_string();
    let mut headers = vec![
        ("content-type", "text/html; charset=utf-8"),
        ("x-request-id", request_id.as_str()),
        ("cache-control", "private, no-cache"),
        ("vary", "Cookie"),
    ];
    headers.extend(page.set_cookies.iter().map(|c| ("set-cookie", c.as_str())));

    let body = start_response(response_out, page.status, &headers)?;
    let mut sink = StreamingSink::new(body, ctx.timing.clone());
    write_page(&mut sink, page).await?;

    let mut entry = logger
        .info_builder("page streamed")
        .field_u64("status", u64::from(page.status))
        .field_u64("sections", sink.sections_sent().len() as u64)
        .field_u64("bytes", sink.bytes_sent() as u64)
        .duration_ms("total_ms", sink.timing().elapsed());
    if let Some(shell) = sink.timing().time_to_shell() {
        entry = entry.duration_ms("shell_ms", shell);
    }
    entry.emit();
    Ok(())
}
