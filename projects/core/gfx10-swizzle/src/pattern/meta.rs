//! Metadata pattern tables: HTILE (shared by the CMASK path, which uses the
//! same xmask base index) and DCC for the render-optimized 64KB family.

use super::bits::*;

/// Row of [`HTILE_PATTERN`] per (pipes, packers, sample count) group.
pub static HTILE_PATIDX: [u8; 80] = [
    0, // 1xaa ua
    0, // 2xaa ua
    0, // 4xaa ua
    0, // 8xaa ua
    0, // 1 pipes (1-2 pkrs) 1xaa pa
    0, // 1 pipes (1-2 pkrs) 2xaa pa
    0, // 1 pipes (1-2 pkrs) 4xaa pa
    0, // 1 pipes (1-2 pkrs) 8xaa pa
    1, // 2 pipes (1-2 pkrs) 1xaa pa
    1, // 2 pipes (1-2 pkrs) 2xaa pa
    1, // 2 pipes (1-2 pkrs) 4xaa pa
    1, // 2 pipes (1-2 pkrs) 8xaa pa
    2, // 4 pipes (1-2 pkrs) 1xaa pa
    2, // 4 pipes (1-2 pkrs) 2xaa pa
    2, // 4 pipes (1-2 pkrs) 4xaa pa
    2, // 4 pipes (1-2 pkrs) 8xaa pa
    3, // 8 pipes (1-2 pkrs) 1xaa pa
    3, // 8 pipes (1-2 pkrs) 2xaa pa
    3, // 8 pipes (1-2 pkrs) 4xaa pa
    3, // 8 pipes (1-2 pkrs) 8xaa pa
    1, // 2 pipes (4 pkrs) 1xaa pa
    1, // 2 pipes (4 pkrs) 2xaa pa
    1, // 2 pipes (4 pkrs) 4xaa pa
    1, // 2 pipes (4 pkrs) 8xaa pa
    4, // 4 pipes (4 pkrs) 1xaa pa
    4, // 4 pipes (4 pkrs) 2xaa pa
    4, // 4 pipes (4 pkrs) 4xaa pa
    4, // 4 pipes (4 pkrs) 8xaa pa
    5, // 8 pipes (4 pkrs) 1xaa pa
    5, // 8 pipes (4 pkrs) 2xaa pa
    5, // 8 pipes (4 pkrs) 4xaa pa
    5, // 8 pipes (4 pkrs) 8xaa pa
    6, // 16 pipes (4 pkrs) 1xaa pa
    6, // 16 pipes (4 pkrs) 2xaa pa
    6, // 16 pipes (4 pkrs) 4xaa pa
    6, // 16 pipes (4 pkrs) 8xaa pa
    7, // 4 pipes (8 pkrs) 1xaa pa
    7, // 4 pipes (8 pkrs) 2xaa pa
    7, // 4 pipes (8 pkrs) 4xaa pa
    7, // 4 pipes (8 pkrs) 8xaa pa
    8, // 8 pipes (8 pkrs) 1xaa pa
    8, // 8 pipes (8 pkrs) 2xaa pa
    8, // 8 pipes (8 pkrs) 4xaa pa
    8, // 8 pipes (8 pkrs) 8xaa pa
    9, // 16 pipes (8 pkrs) 1xaa pa
    9, // 16 pipes (8 pkrs) 2xaa pa
    9, // 16 pipes (8 pkrs) 4xaa pa
    9, // 16 pipes (8 pkrs) 8xaa pa
    10, // 32 pipes (8 pkrs) 1xaa pa
    10, // 32 pipes (8 pkrs) 2xaa pa
    10, // 32 pipes (8 pkrs) 4xaa pa
    10, // 32 pipes (8 pkrs) 8xaa pa
    11, // 8 pipes (16 pkrs) 1xaa pa
    11, // 8 pipes (16 pkrs) 2xaa pa
    11, // 8 pipes (16 pkrs) 4xaa pa
    11, // 8 pipes (16 pkrs) 8xaa pa
    12, // 16 pipes (16 pkrs) 1xaa pa
    12, // 16 pipes (16 pkrs) 2xaa pa
    12, // 16 pipes (16 pkrs) 4xaa pa
    12, // 16 pipes (16 pkrs) 8xaa pa
    13, // 32 pipes (16 pkrs) 1xaa pa
    13, // 32 pipes (16 pkrs) 2xaa pa
    13, // 32 pipes (16 pkrs) 4xaa pa
    13, // 32 pipes (16 pkrs) 8xaa pa
    14, // 64 pipes (16 pkrs) 1xaa pa
    14, // 64 pipes (16 pkrs) 2xaa pa
    14, // 64 pipes (16 pkrs) 4xaa pa
    14, // 64 pipes (16 pkrs) 8xaa pa
    15, // 16 pipes (32 pkrs) 1xaa pa
    15, // 16 pipes (32 pkrs) 2xaa pa
    15, // 16 pipes (32 pkrs) 4xaa pa
    15, // 16 pipes (32 pkrs) 8xaa pa
    16, // 32 pipes (32 pkrs) 1xaa pa
    16, // 32 pipes (32 pkrs) 2xaa pa
    16, // 32 pipes (32 pkrs) 4xaa pa
    16, // 32 pipes (32 pkrs) 8xaa pa
    17, // 64 pipes (32 pkrs) 1xaa pa
    17, // 64 pipes (32 pkrs) 2xaa pa
    17, // 64 pipes (32 pkrs) 4xaa pa
    17, // 64 pipes (32 pkrs) 8xaa pa
];

/// HTILE address patterns; 18 output bits, bit 0 being the nibble select.
pub static HTILE_PATTERN: [[u64; 18]; 18] = [
    [0, 0, 0, X3, Y3, X4, Y4, X5, Y5, X6, Y6, X7, Y7, 0, 0, 0, 0, 0], //0
    [0, 0, 0, X3, Y3, Y4, X5, Y5, X6, Z0^X4^Y4, Y6, X7, Y7, 0, 0, 0, 0, 0], //1
    [0, 0, 0, X3, Y3, X5, Y5, X6, Y6, Y4^X5^Y5, Z0^X4^Y4, X7, Y7, X8, 0, 0, 0, 0], //2
    [0, 0, 0, X3, Y3, Y5, X6, Y6, X7, Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y7, X8, Y8, 0, 0, 0], //3
    [0, 0, 0, X3, Y3, X5, X6, Y6, X7, Y4^X6^Y6, Z1^X4^Y4, Y7, X8, Y8, X5^Y5, 0, 0, 0], //4
    [0, 0, 0, X3, Y3, X5, X6, Y6, X7, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y7, X8, Y8, 0, 0, 0], //5
    [0, 0, 0, X3, Y3, X6, Y6, X7, Y7, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5^Y6, X8, Y8, X9, 0, 0], //6
    [0, 0, 0, X3, Y3, Y4, X5, X6, Y6, Z1^X4^Y4, Z0^X5^Y5, X7, Y7, X8, 0, 0, 0, 0], //7
    [0, 0, 0, X3, Y3, X6, Y6, X7, Y7, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X8, Y8, X9, X5^Y6, 0, 0], //8
    [0, 0, 0, X3, Y3, X6, Y6, X7, Y7, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, X8, Y8, X9, 0, 0], //9
    [0, 0, 0, X3, Y3, Y6, X7, Y7, X8, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, X6^Y6, Y8, X9, Y9, 0], //10
    [0, 0, 0, X3, Y3, Y4, X6, Y6, X7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, Y7, X8, Y8, 0, 0, 0], //11
    [0, 0, 0, X3, Y3, X6, X7, Y7, X8, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, Y8, X9, Y9, X6^Y6, 0], //12
    [0, 0, 0, X3, Y3, X6, X7, Y7, X8, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, Y8, X9, Y9, 0], //13
    [0, 0, 0, X3, Y3, X7, Y7, X8, Y8, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, X6^Y8, X9, Y9, X10], //14
    [0, 0, 0, X3, Y3, Y4, X6, X7, Y7, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, X8, Y8, X9, 0, 0], //15
    [0, 0, 0, X3, Y3, X7, Y7, X8, Y8, Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, X5^Y8, Y6^X7, X9, Y9, X10, X6^Y7], //16
    [0, 0, 0, X3, Y3, X7, Y7, X8, Y8, Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, X5^Y8, Y6^X7, X6^Y7, X9, Y9, X10], //17
];

/// Row of [`DCC_R_X_PATTERN`] per (alignment, pipes, packers, bpe) group.
pub static DCC_64K_R_X_PATIDX: [u8; 80] = [
    0, // 1 bpe ua
    1, // 2 bpe ua
    2, // 4 bpe ua
    3, // 8 bpe ua
    4, // 16 bpe ua
    0, // 1 pipes (1 pkrs) 1 bpe pa
    1, // 1 pipes (1 pkrs) 2 bpe pa
    2, // 1 pipes (1 pkrs) 4 bpe pa
    3, // 1 pipes (1 pkrs) 8 bpe pa
    4, // 1 pipes (1 pkrs) 16 bpe pa
    5, // 2 pipes (1-2 pkrs) 1 bpe pa
    6, // 2 pipes (1-2 pkrs) 2 bpe pa
    7, // 2 pipes (1-2 pkrs) 4 bpe pa
    8, // 2 pipes (1-2 pkrs) 8 bpe pa
    9, // 2 pipes (1-2 pkrs) 16 bpe pa
    10, // 4 pipes (1-2 pkrs) 1 bpe pa
    11, // 4 pipes (1-2 pkrs) 2 bpe pa
    12, // 4 pipes (1-2 pkrs) 4 bpe pa
    13, // 4 pipes (1-2 pkrs) 8 bpe pa
    14, // 4 pipes (1-2 pkrs) 16 bpe pa
    15, // 8 pipes (2 pkrs) 1 bpe pa
    16, // 8 pipes (2 pkrs) 2 bpe pa
    17, // 8 pipes (2 pkrs) 4 bpe pa
    18, // 8 pipes (2 pkrs) 8 bpe pa
    19, // 8 pipes (2 pkrs) 16 bpe pa
    20, // 4 pipes (4 pkrs) 1 bpe pa
    21, // 4 pipes (4 pkrs) 2 bpe pa
    22, // 4 pipes (4 pkrs) 4 bpe pa
    23, // 4 pipes (4 pkrs) 8 bpe pa
    24, // 4 pipes (4 pkrs) 16 bpe pa
    25, // 8 pipes (4 pkrs) 1 bpe pa
    26, // 8 pipes (4 pkrs) 2 bpe pa
    27, // 8 pipes (4 pkrs) 4 bpe pa
    28, // 8 pipes (4 pkrs) 8 bpe pa
    29, // 8 pipes (4 pkrs) 16 bpe pa
    30, // 16 pipes (4 pkrs) 1 bpe pa
    31, // 16 pipes (4 pkrs) 2 bpe pa
    32, // 16 pipes (4 pkrs) 4 bpe pa
    33, // 16 pipes (4 pkrs) 8 bpe pa
    34, // 16 pipes (4 pkrs) 16 bpe pa
    35, // 8 pipes (8 pkrs) 1 bpe pa
    36, // 8 pipes (8 pkrs) 2 bpe pa
    37, // 8 pipes (8 pkrs) 4 bpe pa
    38, // 8 pipes (8 pkrs) 8 bpe pa
    39, // 8 pipes (8 pkrs) 16 bpe pa
    35, // 16 pipes (8 pkrs) 1 bpe pa
    36, // 16 pipes (8 pkrs) 2 bpe pa
    37, // 16 pipes (8 pkrs) 4 bpe pa
    40, // 16 pipes (8 pkrs) 8 bpe pa
    41, // 16 pipes (8 pkrs) 16 bpe pa
    42, // 32 pipes (8 pkrs) 1 bpe pa
    43, // 32 pipes (8 pkrs) 2 bpe pa
    44, // 32 pipes (8 pkrs) 4 bpe pa
    45, // 32 pipes (8 pkrs) 8 bpe pa
    46, // 32 pipes (8 pkrs) 16 bpe pa
    47, // 16 pipes (16 pkrs) 1 bpe pa
    48, // 16 pipes (16 pkrs) 2 bpe pa
    49, // 16 pipes (16 pkrs) 4 bpe pa
    50, // 16 pipes (16 pkrs) 8 bpe pa
    51, // 16 pipes (16 pkrs) 16 bpe pa
    47, // 32 pipes (16 pkrs) 1 bpe pa
    48, // 32 pipes (16 pkrs) 2 bpe pa
    49, // 32 pipes (16 pkrs) 4 bpe pa
    52, // 32 pipes (16 pkrs) 8 bpe pa
    53, // 32 pipes (16 pkrs) 16 bpe pa
    54, // 64 pipes (16 pkrs) 1 bpe pa
    55, // 64 pipes (16 pkrs) 2 bpe pa
    56, // 64 pipes (16 pkrs) 4 bpe pa
    57, // 64 pipes (16 pkrs) 8 bpe pa
    58, // 64 pipes (16 pkrs) 16 bpe pa
    59, // 32 pipes (32 pkrs) 1 bpe pa
    60, // 32 pipes (32 pkrs) 2 bpe pa
    61, // 32 pipes (32 pkrs) 4 bpe pa
    62, // 32 pipes (32 pkrs) 8 bpe pa
    63, // 32 pipes (32 pkrs) 16 bpe pa
    59, // 64 pipes (32 pkrs) 1 bpe pa
    60, // 64 pipes (32 pkrs) 2 bpe pa
    61, // 64 pipes (32 pkrs) 4 bpe pa
    64, // 64 pipes (32 pkrs) 8 bpe pa
    65, // 64 pipes (32 pkrs) 16 bpe pa
];

/// DCC address patterns; 17 output bits.
pub static DCC_R_X_PATTERN: [[u64; 17]; 75] = [
    [0, X4, Y4, X5, Y5, X6, Y6, X7, Y7, X8, Y8, X9, Y9, 0, 0, 0, 0], //0
    [0, Y3, X4, Y4, X5, Y5, X6, Y6, X7, Y7, X8, Y8, X9, 0, 0, 0, 0], //1
    [0, X3, Y3, X4, Y4, X5, Y5, X6, Y6, X7, Y7, X8, Y8, 0, 0, 0, 0], //2
    [0, Y2, X3, Y3, X4, Y4, X5, Y5, X6, Y6, X7, Y7, X8, 0, 0, 0, 0], //3
    [0, X2, Y2, X3, Y3, X4, Y4, X5, Y5, X6, Y6, X7, Y7, 0, 0, 0, 0], //4
    [0, Y4, X5, Y5, X6, Y6, X7, Y7, X8, Z0^X4^Y4, Y8, X9, Y9, 0, 0, 0, 0], //5
    [0, Y3, Y4, X5, Y5, X6, Y6, X7, Y7, Z0^X4^Y4, X8, Y8, X9, 0, 0, 0, 0], //6
    [0, X3, Y3, Y4, X5, Y5, X6, Y6, X7, Z0^X4^Y4, Y7, X8, Y8, 0, 0, 0, 0], //7
    [0, Y2, X3, Y3, Y4, X5, Y5, X6, Y6, Z0^X4^Y4, X7, Y7, X8, 0, 0, 0, 0], //8
    [0, X2, Y2, X3, Y3, Y4, X5, Y5, X6, Z0^X4^Y4, Y6, X7, Y7, 0, 0, 0, 0], //9
    [0, X5, Y5, X6, Y6, X7, Y7, X8, Y8, Y4^X5^Y5, Z0^X4^Y4, X9, Y9, 0, 0, 0, 0], //10
    [0, Y3, X5, Y5, X6, Y6, X7, Y7, X8, Y4^X5^Y5, Z0^X4^Y4, Y8, X9, 0, 0, 0, 0], //11
    [0, X3, Y3, X5, Y5, X6, Y6, X7, Y7, Y4^X5^Y5, Z0^X4^Y4, X8, Y8, 0, 0, 0, 0], //12
    [0, Y2, X3, Y3, X5, Y5, X6, Y6, X7, Y4^X5^Y5, Z0^X4^Y4, Y7, X8, 0, 0, 0, 0], //13
    [0, X2, Y2, X3, Y3, X5, Y5, X6, Y6, Y4^X5^Y5, Z0^X4^Y4, X7, Y7, 0, 0, 0, 0], //14
    [0, Y5, X6, Y6, X7, Y7, X8, Y8, X9, Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y9, 0, 0, 0, 0], //15
    [0, Y3, Y5, X6, Y6, X7, Y7, X8, Y8, Y4^X5^Y5, Z0^X4^Y4, X5^Y5, X9, 0, 0, 0, 0], //16
    [0, X3, Y3, Y5, X6, Y6, X7, Y7, X8, Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y8, 0, 0, 0, 0], //17
    [0, Y2, X3, Y3, Y5, X6, Y6, X7, Y7, Y4^X5^Y5, Z0^X4^Y4, X5^Y5, X8, 0, 0, 0, 0], //18
    [0, X2, Y2, X3, Y3, Y5, X6, Y6, X7, Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y7, 0, 0, 0, 0], //19
    [0, X5, X6, Y6, X7, Y7, X8, Y8, X9, Y4^X6^Y6, Z1^X4^Y4, X5^Y5, Y9, 0, 0, 0, 0], //20
    [0, Y3, X5, X6, Y6, X7, Y7, X8, Y8, Y4^X6^Y6, Z1^X4^Y4, X5^Y5, X9, 0, 0, 0, 0], //21
    [0, X3, Y3, X5, X6, Y6, X7, Y7, X8, Y4^X6^Y6, Z1^X4^Y4, X5^Y5, Y8, 0, 0, 0, 0], //22
    [0, Y2, X3, Y3, X5, X6, Y6, X7, Y7, Y4^X6^Y6, Z1^X4^Y4, X5^Y5, X8, 0, 0, 0, 0], //23
    [0, X2, Y2, X3, Y3, X5, X6, Y6, X7, Y4^X6^Y6, Z1^X4^Y4, X5^Y5, Y7, 0, 0, 0, 0], //24
    [0, X5, X6, Y6, X7, Y7, X8, Y8, X9, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y9, 0, 0, 0, 0], //25
    [0, Y3, X5, X6, Y6, X7, Y7, X8, Y8, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X9, 0, 0, 0, 0], //26
    [0, X3, Y3, X5, X6, Y6, X7, Y7, X8, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y8, 0, 0, 0, 0], //27
    [0, Y2, X3, Y3, X5, X6, Y6, X7, Y7, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X8, 0, 0, 0, 0], //28
    [0, X2, Y2, X3, Y3, X5, X6, Y6, X7, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y7, 0, 0, 0, 0], //29
    [0, X6, Y6, X7, Y7, X8, Y8, X9, Y9, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5^Y6, 0, 0, 0, 0], //30
    [0, Y3, X6, Y6, X7, Y7, X8, Y8, X9, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5^Y6, 0, 0, 0, 0], //31
    [0, X3, Y3, X6, Y6, X7, Y7, X8, Y8, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5^Y6, 0, 0, 0, 0], //32
    [0, Y2, X3, Y3, X6, Y6, X7, Y7, X8, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5^Y6, 0, 0, 0, 0], //33
    [0, X2, Y2, X3, Y3, X6, Y6, X7, Y7, Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5^Y6, 0, 0, 0, 0], //34
    [0, X6, Y6, X7, Y7, X8, Y8, X9, Y9, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, 0, 0, 0, 0], //35
    [0, Y3, X6, Y6, X7, Y7, X8, Y8, X9, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, 0, 0, 0, 0], //36
    [0, X3, Y3, X6, Y6, X7, Y7, X8, Y8, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, 0, 0, 0, 0], //37
    [0, Y2, X3, Y3, X6, Y6, X7, Y7, X8, Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, X5^Y6, 0, 0, 0, 0], //38
    [0, X2, Y2, X3, Y3, X6, Y6, X7, Y7, Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, X5^Y6, 0, 0, 0, 0], //39
    [0, Y2, X3, Y3, X6, Y6, X7, Y7, X8, Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Z0^X5^Y6, 0, 0, 0, 0], //40
    [0, X2, Y2, X3, Y3, X6, Y6, X7, Y7, Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Z0^X5^Y6, 0, 0, 0, 0], //41
    [0, Y6, X7, Y7, X8, Y8, X9, Y9, X10, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, X6^Y6, 0, 0, 0], //42
    [0, Y3, Y6, X7, Y7, X8, Y8, X9, Y9, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, X6^Y6, 0, 0, 0], //43
    [0, X3, Y3, Y6, X7, Y7, X8, Y8, X9, Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6, X6^Y6, 0, 0, 0], //44
    [0, Y2, X3, Y3, Y6, X7, Y7, X8, Y8, Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Z0^X5^Y6, X6^Y6, 0, 0, 0], //45
    [0, X2, Y2, Y3, X6, Y6, X7, Y7, X8, Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Z0^X5^Y6, X3^Y6, 0, 0, 0], //46
    [0, X6, X7, Y7, X8, Y8, X9, Y9, X10, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, 0, 0, 0], //47
    [0, Y3, X6, X7, Y7, X8, Y8, X9, Y9, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, 0, 0, 0], //48
    [0, X3, Y3, X6, X7, Y7, X8, Y8, X9, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, 0, 0, 0], //49
    [0, Y2, X3, Y3, X6, X7, Y7, X8, Y8, Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7, X6^Y6, 0, 0, 0], //50
    [0, X2, X3, Y3, X6, X7, Y7, Y2, X8, Y4^X8^Y8, Z2^X4^Y4, Z1^Y5^X7, Z0^X5^Y7, X6^Y6, 0, 0, 0], //51
    [0, Y2, X3, Y3, X6, X7, Y7, X8, Y8, Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7, Z0^X6^Y6, 0, 0, 0], //52
    [0, X2, X3, Y3, X6, X7, Y7, Y2, X8, Y4^X8^Y8, Z2^X4^Y4, Z1^Y5^X7, Z0^X5^Y7, Y2^X6^Y6, 0, 0, 0], //53
    [0, X7, Y7, X8, Y8, X9, Y9, X10, Y10, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, X6^Y8, 0, 0], //54
    [0, Y3, X7, Y7, X8, Y8, X9, Y9, X10, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, X6^Y8, 0, 0], //55
    [0, X3, Y3, X7, Y7, X8, Y8, X9, Y9, Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7, X6^Y6, X6^Y8, 0, 0], //56
    [0, Y2, Y3, X6, X7, Y7, X8, Y8, X9, Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7, Z0^X6^Y6, X3^Y8, 0, 0], //57
    [0, X2, Y3, X6, X7, Y7, X8, Y2, Y8, Y4^X8^Y8, Z2^X4^Y4, Z1^Y5^X7, Z0^X5^Y7, Y2^X6^Y6, X3^Y8, 0, 0], //58
    [0, X7, Y7, X8, Y8, X9, Y9, X10, Y10, Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, X5^Y8, Y6^X7, X6^Y7, 0, 0], //59
    [0, Y3, X7, Y7, X8, Y8, X9, Y9, X10, Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, X5^Y8, Y6^X7, X6^Y7, 0, 0], //60
    [0, X3, Y3, X7, Y7, X8, Y8, X9, Y9, Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, X5^Y8, Y6^X7, X6^Y7, 0, 0], //61
    [0, X3, Y3, X7, Y7, X8, Y8, Y2, X9, Y4^X9^Y9, Z3^X4^Y4, Z2^Y5^X8, Z1^X5^Y8, Y2^Y6^X7, X6^Y7, 0, 0], //62
    [0, X3, Y3, X7, Y7, X8, Y8, X2, Y2, Y4^X9^Y9, Z2^X4^Y4, Z1^Y5^X8, Z0^X5^Y8, Y2^Y6^X7, X6^Y7, 0, 0], //63
    [0, X3, Y3, X7, Y7, X8, Y8, Y2, X9, Y4^X9^Y9, Z3^X4^Y4, Z2^Y5^X8, Z1^X5^Y8, Y2^Y6^X7, Z0^X6^Y7, 0, 0], //64
    [0, X3, Y3, X7, Y7, X8, Y8, X2, Y2, Y4^X9^Y9, Z2^X4^Y4, Z1^Y5^X8, Z0^X5^Y8, Y2^Y6^X7, X2^X6^Y7, 0, 0], //65
    [0, X2, Y2, X3, Y3, Y6, X7, Y7, X8, Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Z0^X5^Y6, X6^Y6, 0, 0, 0], //66
    [0, X2, Y2, X3, Y3, X6, X7, Y7, X8, Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7, X6^Y6, 0, 0, 0], //67
    [0, X2, Y2, X3, Y3, X6, X7, Y7, X8, Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7, Z0^X6^Y6, 0, 0, 0], //68
    [0, Y2, X3, Y3, X7, Y7, X8, Y8, X9, Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7, Z0^X6^Y6, X6^Y8, 0, 0], //69
    [0, X2, Y2, X3, Y3, X7, Y7, X8, Y8, Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7, Z0^X6^Y6, X6^Y8, 0, 0], //70
    [0, Y2, X3, Y3, X7, Y7, X8, Y8, X9, Y4^X9^Y9, X4^Y4^Z4, Z3^Y5^X8, Z2^X5^Y8, Z1^Y6^X7, X6^Y7, 0, 0], //71
    [0, X2, Y2, X3, Y3, X7, Y7, X8, Y8, Y4^X9^Y9, X4^Y4^Z4, Z3^Y5^X8, Z2^X5^Y8, Z1^Y6^X7, X6^Y7, 0, 0], //72
    [0, Y2, X3, Y3, X7, Y7, X8, Y8, X9, Y4^X9^Y9, X4^Y4^Z4, Z3^Y5^X8, Z2^X5^Y8, Z1^Y6^X7, Z0^X6^Y7, 0, 0], //73
    [0, X2, Y2, X3, Y3, X7, Y7, X8, Y8, Y4^X9^Y9, X4^Y4^Z4, Z3^Y5^X8, Z2^X5^Y8, Z1^Y6^X7, Z0^X6^Y7, 0, 0], //74
];
