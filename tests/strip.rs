use tristrip::error::Error;
use tristrip::{find_strip, Strip, StripBuilder, VertexKey};

/// The 20 faces of an icosahedron over vertices 0-11.
const ICOSAHEDRON: [[u32; 3]; 20] = [
    [0, 1, 2],
    [3, 1, 0],
    [4, 1, 3],
    [5, 1, 4],
    [2, 1, 5],
    [6, 7, 8],
    [8, 7, 9],
    [9, 7, 10],
    [10, 7, 11],
    [11, 7, 6],
    [0, 2, 6],
    [2, 5, 11],
    [5, 4, 10],
    [4, 3, 9],
    [3, 0, 8],
    [8, 0, 6],
    [9, 3, 8],
    [10, 4, 9],
    [11, 5, 10],
    [6, 2, 11],
];

fn sorted<V: VertexKey + Ord>(window: &[V]) -> [V; 3] {
    let mut set = [window[0].clone(), window[1].clone(), window[2].clone()];
    set.sort_unstable();
    set
}

/// Assert the two properties a found strip must have: every window's vertex
/// set is one of the input triangles, and every input triangle is some
/// window's vertex set.
fn assert_valid_covering<V: VertexKey + Ord>(strip: &Strip<V>, triangles: &[[V; 3]]) {
    let inputs: Vec<[V; 3]> = triangles.iter().map(|t| sorted(t)).collect();
    let windows: Vec<[V; 3]> = strip.windows().map(sorted).collect();

    for (position, window) in windows.iter().enumerate() {
        assert!(
            window[0] != window[1] && window[1] != window[2],
            "window {position} repeats a vertex: {window:?}"
        );
        assert!(
            inputs.contains(window),
            "window {position} ({window:?}) is not an input triangle"
        );
    }
    for (index, triangle) in inputs.iter().enumerate() {
        assert!(
            windows.contains(triangle),
            "triangle {index} ({triangle:?}) is not covered"
        );
    }
}

#[test]
fn single_triangle() {
    let strip = find_strip([[0u32, 1, 2]]).unwrap();
    assert_eq!(strip.len(), 3);
    assert_eq!(strip.triangle_count(), 1);
    assert_eq!(sorted(strip.vertices()), [0, 1, 2]);
}

#[test]
fn edge_sharing_pair_uses_each_triangle_once() {
    let triangles = [[0u32, 1, 2], [1, 2, 3]];
    let strip = find_strip(triangles).unwrap();
    // a covering with every triangle used once exists, so the first
    // deepening round must find it: 3 seed vertices + 1 extension
    assert_eq!(strip.len(), 4);
    assert_valid_covering(&strip, &triangles);
}

#[test]
fn cap_one_covering_is_never_escalated_past() {
    let triangles = [[0u32, 1, 2], [1, 2, 3], [2, 3, 4], [3, 4, 5]];
    let strip = find_strip(triangles).unwrap();
    assert_eq!(strip.len(), 6);
    assert_valid_covering(&strip, &triangles);
}

#[test]
fn vertex_disjoint_pair_is_rejected() {
    let result = find_strip([[0u32, 1, 2], [3, 4, 5]]);
    assert!(matches!(
        result,
        Err(Error::Disconnected {
            reached: 1,
            total: 2
        })
    ));
}

#[test]
fn empty_input_is_rejected() {
    let triangles: [[u32; 3]; 0] = [];
    assert!(matches!(find_strip(triangles), Err(Error::Empty)));
}

#[test]
fn degenerate_triangle_is_rejected() {
    assert!(matches!(
        find_strip([[0u32, 0, 1]]),
        Err(Error::Degenerate(0))
    ));
}

#[test]
fn icosahedron_is_covered() {
    let strip = find_strip(ICOSAHEDRON).unwrap();
    // 20 triangles need at least 3 + 19 vertices
    assert!(strip.len() >= 22, "strip too short: {}", strip.len());
    assert_valid_covering(&strip, &ICOSAHEDRON);
}

#[test]
fn search_is_deterministic() {
    let first = find_strip(ICOSAHEDRON).unwrap();
    let second = find_strip(ICOSAHEDRON).unwrap();
    assert_eq!(first, second);
}

#[test]
fn vertex_keys_are_opaque() {
    let triangles = [["a", "b", "c"], ["b", "c", "d"]];
    let strip = find_strip(triangles).unwrap();
    assert_eq!(strip.len(), 4);
    assert_valid_covering(&strip, &triangles);
}

#[test]
fn builder_reports_fragment_shape() {
    let builder = StripBuilder::new(ICOSAHEDRON).unwrap();
    assert_eq!(builder.triangle_count(), 20);
    assert_eq!(builder.vertex_count(), 12);
}
