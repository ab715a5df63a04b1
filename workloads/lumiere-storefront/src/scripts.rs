//! Client scripts appended to the shell closing.

/// Home page: autoplay reload, swipe reporting and slide motion.
///
/// Reads the `carousel-state` JSON rendered by the hero section. Autoplay
/// navigates to the tick URL after the configured period; a drag release
/// reports `offset,velocity` (px and px/s) for the server to classify.
pub const HOME_SCRIPT: &str = r#"<script>
(function () {
    var stateEl = document.getElementById('carousel-state');
    if (!stateEl) return;
    var state = JSON.parse(stateEl.textContent);

    requestAnimationFrame(function () {
        requestAnimationFrame(function () {
            document.querySelectorAll('.hero-slide[data-to]').forEach(function (slide) {
                var to = slide.getAttribute('data-to');
                var transition = slide.style.transition;
                slide.setAttribute('style', to + ' transition: ' + transition + ';');
            });
        });
    });

    var timer = setTimeout(function () {
        window.location.replace(state.tick_href);
    }, state.autoplay_ms);

    var track = document.querySelector('.hero');
    if (!track) return;
    var startX = 0, lastX = 0, lastT = 0, prevX = 0, prevT = 0, dragging = false;

    track.addEventListener('pointerdown', function (e) {
        if (e.target.closest('a')) return;
        dragging = true;
        startX = lastX = prevX = e.clientX;
        lastT = prevT = e.timeStamp;
    });
    track.addEventListener('pointermove', function (e) {
        if (!dragging) return;
        prevX = lastX; prevT = lastT;
        lastX = e.clientX; lastT = e.timeStamp;
    });
    track.addEventListener('pointerup', function (e) {
        if (!dragging) return;
        dragging = false;
        var offset = e.clientX - startX;
        var dt = (e.timeStamp - prevT) / 1000;
        var velocity = dt > 0 ? (e.clientX - prevX) / dt : 0;
        if (Math.abs(offset) < 5) return;
        clearTimeout(timer);
        window.location.assign(state.swipe_href + offset.toFixed(1) + ',' + velocity.toFixed(1));
    });
})();
</script>"#;

/// Any page with a font selector: an outside click closes an open menu.
pub const FONT_SELECTOR_SCRIPT: &str = r#"<script>
(function () {
    var selector = document.querySelector('.font-selector.open');
    if (!selector) return;
    document.addEventListener('mousedown', function (e) {
        if (selector.contains(e.target)) return;
        var toggle = selector.querySelector('.font-selector-toggle');
        if (toggle) window.location.replace(toggle.getAttribute('href'));
    });
})();
</script>"#;
