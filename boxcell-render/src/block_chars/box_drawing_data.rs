//! Raw box drawing character data.
//!
//! One [`BoxDescriptor`] per codepoint of U+2500–U+257F, indexed by
//! `codepoint - 0x2500`. The table is `const` data, shared read-only by every
//! thread without synchronization.

use super::types::{Arc, BoxDescriptor, Diagonal, EdgeStyle};

const B: BoxDescriptor = BoxDescriptor::EMPTY;

const L: EdgeStyle = EdgeStyle::Light;
const L2: EdgeStyle = EdgeStyle::LightDash2;
const L3: EdgeStyle = EdgeStyle::LightDash3;
const L4: EdgeStyle = EdgeStyle::LightDash4;
const D: EdgeStyle = EdgeStyle::Double;
const H: EdgeStyle = EdgeStyle::Heavy;
const H2: EdgeStyle = EdgeStyle::HeavyDash2;
const H3: EdgeStyle = EdgeStyle::HeavyDash3;
const H4: EdgeStyle = EdgeStyle::HeavyDash4;

/// U+2500 .. U+257F (128 box drawing characters)
pub(super) static BOX_DRAWING_DESCRIPTORS: [BoxDescriptor; 0x80] = [
    B.horizontal(L),                   // U+2500 ─
    B.horizontal(H),                   // U+2501 ━
    B.vertical(L),                     // U+2502 │
    B.vertical(H),                     // U+2503 ┃
    B.horizontal(L3),                  // U+2504 ┄
    B.horizontal(H3),                  // U+2505 ┅
    B.vertical(L3),                    // U+2506 ┆
    B.vertical(H3),                    // U+2507 ┇
    B.horizontal(L4),                  // U+2508 ┈
    B.horizontal(H4),                  // U+2509 ┉
    B.vertical(L4),                    // U+250A ┊
    B.vertical(H4),                    // U+250B ┋
    B.right(L).down(L),                // U+250C ┌
    B.right(H).down(L),                // U+250D ┍
    B.right(L).down(H),                // U+250E ┎
    B.right(H).down(H),                // U+250F ┏
    // ───────────────────────────────────────────────────────────────────
    B.down(L).left(L),                 // U+2510 ┐
    B.down(L).left(H),                 // U+2511 ┑
    B.down(H).left(L),                 // U+2512 ┒
    B.down(H).left(H),                 // U+2513 ┓
    B.up(L).right(L),                  // U+2514 └
    B.up(L).right(H),                  // U+2515 ┕
    B.up(H).right(L),                  // U+2516 ┖
    B.up(H).right(H),                  // U+2517 ┗
    B.up(L).left(L),                   // U+2518 ┘
    B.up(L).left(H),                   // U+2519 ┙
    B.up(H).left(L),                   // U+251A ┚
    B.up(H).left(H),                   // U+251B ┛
    B.vertical(L).right(L),            // U+251C ├
    B.vertical(L).right(H),            // U+251D ┝
    B.up(H).right(L).down(L),          // U+251E ┞
    B.up(L).right(L).down(H),          // U+251F ┟
    // ───────────────────────────────────────────────────────────────────
    B.vertical(H).right(L),            // U+2520 ┠
    B.up(H).right(H).down(L),          // U+2521 ┡
    B.up(L).right(H).down(H),          // U+2522 ┢
    B.vertical(H).right(H),            // U+2523 ┣
    B.vertical(L).left(L),             // U+2524 ┤
    B.vertical(L).left(H),             // U+2525 ┥
    B.up(H).down(L).left(L),           // U+2526 ┦
    B.up(L).down(H).left(L),           // U+2527 ┧
    B.vertical(H).left(L),             // U+2528 ┨
    B.up(H).down(L).left(H),           // U+2529 ┩
    B.up(L).down(H).left(H),           // U+252A ┪
    B.vertical(H).left(H),             // U+252B ┫
    B.right(L).down(L).left(L),        // U+252C ┬
    B.right(L).down(L).left(H),        // U+252D ┭
    B.right(H).down(L).left(L),        // U+252E ┮
    B.right(H).down(L).left(H),        // U+252F ┯
    // ───────────────────────────────────────────────────────────────────
    B.right(L).down(H).left(L),        // U+2530 ┰
    B.right(L).down(H).left(H),        // U+2531 ┱
    B.right(H).down(H).left(L),        // U+2532 ┲
    B.right(H).down(H).left(H),        // U+2533 ┳
    B.up(L).right(L).left(L),          // U+2534 ┴
    B.up(L).right(L).left(H),          // U+2535 ┵
    B.up(L).right(H).left(L),          // U+2536 ┶
    B.up(L).right(H).left(H),          // U+2537 ┷
    B.up(H).right(L).left(L),          // U+2538 ┸
    B.up(H).right(L).left(H),          // U+2539 ┹
    B.up(H).right(H).left(L),          // U+253A ┺
    B.up(H).right(H).left(H),          // U+253B ┻
    B.vertical(L).horizontal(L),       // U+253C ┼
    B.vertical(L).right(L).left(H),    // U+253D ┽
    B.vertical(L).right(H).left(L),    // U+253E ┾
    B.vertical(L).horizontal(H),       // U+253F ┿
    // ───────────────────────────────────────────────────────────────────
    B.up(H).right(L).down(L).left(L),  // U+2540 ╀
    B.up(L).right(L).down(H).left(L),  // U+2541 ╁
    B.vertical(H).horizontal(L),       // U+2542 ╂
    B.up(H).right(L).down(L).left(H),  // U+2543 ╃
    B.up(H).right(H).down(L).left(L),  // U+2544 ╄
    B.up(L).right(L).down(H).left(H),  // U+2545 ╅
    B.up(L).right(H).down(H).left(L),  // U+2546 ╆
    B.up(H).right(H).down(L).left(H),  // U+2547 ╇
    B.up(L).right(H).down(H).left(H),  // U+2548 ╈
    B.up(H).right(L).down(H).left(H),  // U+2549 ╉
    B.up(H).right(H).down(H).left(L),  // U+254A ╊
    B.vertical(H).horizontal(H),       // U+254B ╋
    B.horizontal(L2),                  // U+254C ╌
    B.horizontal(H2),                  // U+254D ╍
    B.vertical(L2),                    // U+254E ╎
    B.vertical(H2),                    // U+254F ╏
    // ───────────────────────────────────────────────────────────────────
    B.horizontal(D),                   // U+2550 ═
    B.vertical(D),                     // U+2551 ║
    B.right(D).down(L),                // U+2552 ╒
    B.right(L).down(D),                // U+2553 ╓
    B.right(D).down(D),                // U+2554 ╔
    B.down(L).left(D),                 // U+2555 ╕
    B.down(D).left(L),                 // U+2556 ╖
    B.down(D).left(D),                 // U+2557 ╗
    B.up(L).right(D),                  // U+2558 ╘
    B.up(D).right(L),                  // U+2559 ╙
    B.up(D).right(D),                  // U+255A ╚
    B.up(L).left(D),                   // U+255B ╛
    B.up(D).left(L),                   // U+255C ╜
    B.up(D).left(D),                   // U+255D ╝
    B.vertical(L).right(D),            // U+255E ╞
    B.vertical(D).right(L),            // U+255F ╟
    // ───────────────────────────────────────────────────────────────────
    B.vertical(D).right(D),            // U+2560 ╠
    B.vertical(L).left(D),             // U+2561 ╡
    B.vertical(D).left(L),             // U+2562 ╢
    B.vertical(D).left(D),             // U+2563 ╣
    B.horizontal(D).down(L),           // U+2564 ╤
    B.horizontal(L).down(D),           // U+2565 ╥
    B.horizontal(D).down(D),           // U+2566 ╦
    B.horizontal(D).up(L),             // U+2567 ╧
    B.horizontal(L).up(D),             // U+2568 ╨
    B.horizontal(D).up(D),             // U+2569 ╩
    B.horizontal(D).vertical(L),       // U+256A ╪
    B.horizontal(L).vertical(D),       // U+256B ╫
    B.horizontal(D).vertical(D),       // U+256C ╬
    B.arc(Arc::TopLeft),               // U+256D ╭
    B.arc(Arc::TopRight),              // U+256E ╮
    B.arc(Arc::BottomRight),           // U+256F ╯
    // ───────────────────────────────────────────────────────────────────
    B.arc(Arc::BottomLeft),            // U+2570 ╰
    B.diagonal(Diagonal::Forward),     // U+2571 ╱
    B.diagonal(Diagonal::Backward),    // U+2572 ╲
    B.diagonal(Diagonal::Cross),       // U+2573 ╳
    B.left(L),                         // U+2574 ╴
    B.up(L),                           // U+2575 ╵
    B.right(L),                        // U+2576 ╶
    B.down(L),                         // U+2577 ╷
    B.left(H),                         // U+2578 ╸
    B.up(H),                           // U+2579 ╹
    B.right(H),                        // U+257A ╺
    B.down(H),                         // U+257B ╻
    B.right(H).left(L),                // U+257C ╼
    B.up(L).down(H),                   // U+257D ╽
    B.right(L).left(H),                // U+257E ╾
    B.up(H).down(L),                   // U+257F ╿
];
