//! Every allocation made while loading is released again, whether the load
//! succeeds and the map is dropped or the load fails part way through.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::path::PathBuf;

use tmx::{load, parse_str, ErrorKind};

struct Counting;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            let _ = LIVE.try_with(|live| live.set(live.get() + 1));
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        let _ = LIVE.try_with(|live| live.set(live.get() - 1));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        System.realloc(ptr, layout, new_size)
    }
}

#[global_allocator]
static GLOBAL: Counting = Counting;

fn live() -> isize {
    LIVE.with(Cell::get)
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run `f` once to settle any one-time initialization, then again while
/// counting, and return the change in live allocations.
fn balance<T>(f: impl Fn() -> T) -> isize {
    drop(f());
    let before = live();
    drop(f());
    live() - before
}

#[test]
fn test_loaded_map_released() {
    let path = fixture("minimal.tmx");
    assert_eq!(balance(|| load(&path).unwrap()), 0);

    let path = fixture("zlib.tmx");
    assert_eq!(balance(|| load(&path).unwrap()), 0);
}

#[test]
fn test_failed_load_released() {
    let path = fixture("short_payload.tmx");
    assert_eq!(
        balance(|| assert_eq!(load(&path).unwrap_err().kind(), ErrorKind::InvalidElementContent)),
        0
    );

    let path = fixture("absent.tmx");
    assert_eq!(balance(|| load(&path).unwrap_err()), 0);
}

#[test]
fn test_failure_after_siblings_released() {
    let source = r#"<map orientation="orthogonal" width="2" height="1" tilewidth="8" tileheight="8">
      <properties><property name="a" value="1"/></properties>
      <tileset name="t" firstgid="1" tilewidth="8" tileheight="8"><image source="t.png" width="8" height="8"/></tileset>
      <layer name="one"><data encoding="csv">1,2</data></layer>
      <objectgroup name="g">
        <object x="1" y="1"><polygon points="0,0 1,1 2,0"/></object>
        <object y="3"/>
      </objectgroup>
    </map>"#;

    let delta = balance(|| {
        let err = parse_str(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingAttribute);
    });
    assert_eq!(delta, 0);
}
