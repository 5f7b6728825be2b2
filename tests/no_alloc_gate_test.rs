use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_life::core::{EngineConfig, LifeEngine, RecordingSurface, SimpleRng};
use tui_life::term::{FrameBuffer, LifeView, StatusLine, Viewport};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// All gates live in one test so no other test thread allocates while counting.
#[test]
fn stepping_is_allocation_free_after_construction() {
    let config = EngineConfig::new(64, 48);

    // Headless.
    let mut engine = LifeEngine::with_seed(config, (128.0, 48.0), 31337).unwrap();
    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            engine.advance();
        }
    });
    assert_eq!(allocs, 0, "advance allocated");

    // Into a preallocated recording surface.
    let mut surface = RecordingSurface::with_capacity(128.0, 48.0, 64 * 48);
    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            surface.clear();
            engine.step(&mut surface);
        }
    });
    assert_eq!(allocs, 0, "step allocated");

    // Into the terminal framebuffer, status bar included.
    let view = LifeView::default();
    let viewport = Viewport::new(128, 49);
    let area = view.board_area(viewport);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut engine =
        LifeEngine::for_surface(config, &view.board(&mut fb, area), &mut SimpleRng::new(7))
            .unwrap();
    let status = StatusLine {
        paused: false,
        frame_ms: 16,
    };

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            view.draw_status(&mut fb, &engine, status);
            let mut board = view.board(&mut fb, area);
            engine.step(&mut board);
        }
    });
    assert_eq!(allocs, 0, "framebuffer frame allocated");
}
