//! Shared pattern nibble tables.
//!
//! Each data-surface pattern is stitched from one `NIBBLE01` row (output
//! bits 0..8) and one row each of `NIBBLE2`, `NIBBLE3` and `NIBBLE4` (four
//! output bits apiece). Rows are shared freely between modes; the
//! per-mode index tables live in `patinfo`.

use super::bits::*;

pub(crate) const NIBBLE01: [[u64; 8]; 25] = [
    [X0, X1, Y0, X2, Y1, Y2, X3, Y3], // 0
    [0, X0, Y0, X1, Y1, X2, Y2, X3], // 1
    [0, 0, X0, Y0, X1, Y1, X2, Y2], // 2
    [0, 0, 0, X0, Y0, X1, X2, Y1], // 3
    [0, 0, 0, 0, X0, Y0, X1, Y1], // 4
    [S0, X0, Y0, X1, Y1, X2, Y2, X3], // 5
    [0, S0, X0, Y0, X1, Y1, X2, Y2], // 6
    [0, 0, S0, X0, Y0, X1, Y1, X2], // 7
    [0, 0, 0, S0, X0, Y0, X1, Y1], // 8
    [0, 0, 0, 0, S0, X0, Y0, X1], // 9
    [S0, S1, X0, Y0, X1, Y1, X2, Y2], // 10
    [0, S0, S1, X0, Y0, X1, Y1, X2], // 11
    [0, 0, S0, S1, X0, Y0, X1, Y1], // 12
    [0, 0, 0, S0, S1, X0, Y0, X1], // 13
    [0, 0, 0, 0, S0, S1, X0, Y0], // 14
    [S0, S1, S2, X0, Y0, X1, Y1, X2], // 15
    [0, S0, S1, S2, X0, Y0, X1, Y1], // 16
    [0, 0, S0, S1, S2, X0, Y0, X1], // 17
    [0, 0, 0, S0, S1, S2, X0, Y0], // 18
    [0, 0, 0, 0, S0, S1, S2, X0], // 19
    [X0, X1, Z0, Y0, Y1, Z1, X2, Z2], // 20
    [0, X0, Z0, Y0, X1, Z1, Y1, Z2], // 21
    [0, 0, X0, Y0, X1, Z0, Y1, Z1], // 22
    [0, 0, 0, X0, Y0, Z0, X1, Z1], // 23
    [0, 0, 0, 0, X0, Z0, Y0, Z1], // 24
];

pub(crate) const NIBBLE2: [[u64; 4]; 347] = [
    [0, 0, 0, 0], // 0
    [Y4, X4, Y5, X5], // 1
    [Y3, X4, Y4, X5], // 2
    [Y3, X3, Y4, X4], // 3
    [Y2, X3, Y3, X4], // 4
    [Y2, X2, Y3, X3], // 5
    [Z0^X4^Y4, X4, Y5, X5], // 6
    [Z0^Y3^X4, X4, Y4, X5], // 7
    [Z0^X3^Y3, X3, Y4, X4], // 8
    [Z0^Y2^X3, X3, Y3, X4], // 9
    [Z0^X2^Y2, X2, Y3, X3], // 10
    [Y4^X5, Z0^X4^Y5, Y5, X5], // 11
    [Y3^X5, Z0^X4^Y4, Y4, X5], // 12
    [Y3^X4, Z0^X3^Y4, Y4, X4], // 13
    [Y2^X4, Z0^X3^Y3, Y3, X4], // 14
    [Y2^X3, Z0^X2^Y3, Y3, X3], // 15
    [Y4^X6, X4^Y6, Z0^X5^Y5, X5], // 16
    [Y3^X6, X4^Y5, Z0^Y4^X5, X5], // 17
    [Y3^X5, X3^Y5, Z0^X4^Y4, X4], // 18
    [Y2^X5, X3^Y4, Z0^Y3^X4, X4], // 19
    [Y2^X4, X2^Y4, Z0^X3^Y3, X3], // 20
    [Z1^Y4^X5, Z0^X4^Y5, Y5, X5], // 21
    [Z1^Y3^X5, Z0^X4^Y4, Y4, X5], // 22
    [Z1^Y3^X4, Z0^X3^Y4, Y4, X4], // 23
    [Z1^Y2^X4, Z0^X3^Y3, Y3, X4], // 24
    [Z1^Y2^X3, Z0^X2^Y3, Y3, X3], // 25
    [Y4^X6, Z1^X4^Y6, Z0^X5^Y5, X5], // 26
    [Y3^X6, Z1^X4^Y5, Z0^Y4^X5, X5], // 27
    [Y3^X5, Z1^X3^Y5, Z0^X4^Y4, X4], // 28
    [Y2^X5, Z1^X3^Y4, Z0^Y3^X4, X4], // 29
    [Y2^X4, Z1^X2^Y4, Z0^X3^Y3, X3], // 30
    [Y4^X7, X4^Y7, Z1^Y5^X6, Z0^X5^Y6], // 31
    [Y3^X7, X4^Y6, Z1^Y4^X6, Z0^X5^Y5], // 32
    [Y3^X6, X3^Y6, Z1^Y4^X5, Z0^X4^Y5], // 33
    [Y2^X6, X3^Y5, Z1^Y3^X5, Z0^X4^Y4], // 34
    [Y2^X5, X2^Y5, Z1^Y3^X4, Z0^X3^Y4], // 35
    [Z2^Y4^X6, Z1^X4^Y6, Z0^X5^Y5, X5], // 36
    [Z2^Y3^X6, Z1^X4^Y5, Z0^Y4^X5, X5], // 37
    [Z2^Y3^X5, Z1^X3^Y5, Z0^X4^Y4, X4], // 38
    [Y2^Z2^X5, Z1^X3^Y4, Z0^Y3^X4, X4], // 39
    [Y2^Z2^X4, Z1^X2^Y4, Z0^X3^Y3, X3], // 40
    [Y4^X7, Z2^X4^Y7, Z1^Y5^X6, Z0^X5^Y6], // 41
    [Y3^X7, Z2^X4^Y6, Z1^Y4^X6, Z0^X5^Y5], // 42
    [Y3^X6, Z2^X3^Y6, Z1^Y4^X5, Z0^X4^Y5], // 43
    [Y2^X6, Z2^X3^Y5, Z1^Y3^X5, Z0^X4^Y4], // 44
    [Y2^X5, X2^Z2^Y5, Z1^Y3^X4, Z0^X3^Y4], // 45
    [Y4^X7, X4^Y7, Z2^Y5^X6, Z1^X5^Y6], // 46
    [Y3^X7, X4^Y6, Z2^Y4^X6, Z1^X5^Y5], // 47
    [Y3^X6, X3^Y6, Z2^Y4^X5, Z1^X4^Y5], // 48
    [Y2^X6, X3^Y5, Z2^Y3^X5, Z1^X4^Y4], // 49
    [Y2^X5, X2^Y5, Z2^Y3^X4, Z1^X3^Y4], // 50
    [Z3^Y4^X7, Z2^X4^Y7, Z1^Y5^X6, Z0^X5^Y6], // 51
    [Y3^Z3^X7, Z2^X4^Y6, Z1^Y4^X6, Z0^X5^Y5], // 52
    [Y3^Z3^X6, Z2^X3^Y6, Z1^Y4^X5, Z0^X4^Y5], // 53
    [Y2^Z3^X6, Z2^X3^Y5, Z1^Y3^X5, Z0^X4^Y4], // 54
    [Y2^Z3^X5, X2^Z2^Y5, Z1^Y3^X4, Z0^X3^Y4], // 55
    [Y4^X7, Z3^X4^Y7, Z2^Y5^X6, Z1^X5^Y6], // 56
    [Y3^X7, Z3^X4^Y6, Z2^Y4^X6, Z1^X5^Y5], // 57
    [Y3^X6, X3^Z3^Y6, Z2^Y4^X5, Z1^X4^Y5], // 58
    [Y2^X6, X3^Z3^Y5, Z2^Y3^X5, Z1^X4^Y4], // 59
    [Y2^X5, X2^Z3^Y5, Z2^Y3^X4, Z1^X3^Y4], // 60
    [Y4^X7, X4^Y7, Z3^Y5^X6, Z2^X5^Y6], // 61
    [Y3^X7, X4^Y6, Z3^Y4^X6, Z2^X5^Y5], // 62
    [Y3^X6, X3^Y6, Z3^Y4^X5, Z2^X4^Y5], // 63
    [Y2^X6, X3^Y5, Y3^Z3^X5, Z2^X4^Y4], // 64
    [Y2^X5, X2^Y5, Y3^Z3^X4, Z2^X3^Y4], // 65
    [Y4^X8, X4^Y8, Z2^Y5^X7, Z1^X5^Y7], // 66
    [Y3^X8, X4^Y7, Z2^Y4^X7, Z1^X5^Y6], // 67
    [Y3^X7, X3^Y7, Z2^Y4^X6, Z1^X4^Y6], // 68
    [Y2^X7, X3^Y6, Z2^Y3^X6, Z1^X4^Y5], // 69
    [Y2^X6, X2^Y6, Z2^Y3^X5, Z1^X3^Y5], // 70
    [Y4^X8, Z3^X4^Y8, Z2^Y5^X7, Z1^X5^Y7], // 71
    [Y3^X8, Z3^X4^Y7, Z2^Y4^X7, Z1^X5^Y6], // 72
    [Y3^X7, X3^Z3^Y7, Z2^Y4^X6, Z1^X4^Y6], // 73
    [Y2^X7, X3^Z3^Y6, Z2^Y3^X6, Z1^X4^Y5], // 74
    [Y2^X6, X2^Z3^Y6, Z2^Y3^X5, Z1^X3^Y5], // 75
    [Y4^X9, X4^Y9, Z3^Y5^X8, Z2^X5^Y8], // 76
    [Y3^X9, X4^Y8, Z3^Y4^X8, Z2^X5^Y7], // 77
    [Y3^X8, X3^Y8, Z3^Y4^X7, Z2^X4^Y7], // 78
    [Y2^X8, X3^Y7, Y3^Z3^X7, Z2^X4^Y6], // 79
    [Y2^X7, X2^Y7, Y3^Z3^X6, Z2^X3^Y6], // 80
    [Y4^Z4^X8, Z3^X4^Y8, Z2^Y5^X7, Z1^X5^Y7], // 81
    [Y3^Z4^X8, Z3^X4^Y7, Z2^Y4^X7, Z1^X5^Y6], // 82
    [Y3^Z4^X7, X3^Z3^Y7, Z2^Y4^X6, Z1^X4^Y6], // 83
    [Y2^Z4^X7, X3^Z3^Y6, Z2^Y3^X6, Z1^X4^Y5], // 84
    [Y2^Z4^X6, X2^Z3^Y6, Z2^Y3^X5, Z1^X3^Y5], // 85
    [Y4^X9, X4^Z4^Y9, Z3^Y5^X8, Z2^X5^Y8], // 86
    [Y3^X9, X4^Z4^Y8, Z3^Y4^X8, Z2^X5^Y7], // 87
    [Y3^X8, X3^Z4^Y8, Z3^Y4^X7, Z2^X4^Y7], // 88
    [Y2^X8, X3^Z4^Y7, Y3^Z3^X7, Z2^X4^Y6], // 89
    [Y2^X7, X2^Z4^Y7, Y3^Z3^X6, Z2^X3^Y6], // 90
    [X4^Y4, X4, Y5, X5], // 91
    [Y3^X4, X4, Y4, X5], // 92
    [X3^Y3, X3, Y4, X4], // 93
    [Y2^X3, X3, Y3, X4], // 94
    [X2^Y2, X2, Y3, X3], // 95
    [Y4^X5, X4^Y5, Y5, X5], // 96
    [Y3^X5, X4^Y4, Y4, X5], // 97
    [Y3^X4, X3^Y4, Y4, X4], // 98
    [Y2^X4, X3^Y3, Y3, X4], // 99
    [Y2^X3, X2^Y3, Y3, X3], // 100
    [Y4^X6, X4^Y6, X5^Y5, X5], // 101
    [Y3^X6, X4^Y5, Y4^X5, X5], // 102
    [Y3^X5, X3^Y5, X4^Y4, X4], // 103
    [Y2^X5, X3^Y4, Y3^X4, X4], // 104
    [Y2^X4, X2^Y4, X3^Y3, X3], // 105
    [Y4^X7, X4^Y7, Y5^X6, X5^Y6], // 106
    [Y3^X7, X4^Y6, Y4^X6, X5^Y5], // 107
    [Y3^X6, X3^Y6, Y4^X5, X4^Y5], // 108
    [Y2^X6, X3^Y5, Y3^X5, X4^Y4], // 109
    [Y2^X5, X2^Y5, Y3^X4, X3^Y4], // 110
    [Y4, X4, Y5^X7, X5^Y7], // 111
    [Y3, X4, Y4^X7, X5^Y6], // 112
    [Y3, X3, Y4^X6, X4^Y6], // 113
    [Y2, X3, Y3^X6, X4^Y5], // 114
    [Y2, X2, Y3^X5, X3^Y5], // 115
    [X4, Y4, X5^Y8, Y5^X8], // 116
    [Y3, X4, Y4^X8, X5^Y7], // 117
    [X3, Y3, X4^Y7, Y4^X7], // 118
    [Y2, X3, Y3^X7, X4^Y7], // 119
    [X2, Y2, X3^Y7, Y3^X6], // 120
    [Z0^X4^Y4, Y4, X5, Y5^X9], // 121
    [Z0^X4^Y4, Y3, Y4, X5^Y8], // 122
    [Z0^X4^Y4, X3, Y3, Y4^X8], // 123
    [Z0^X4^Y4, Y2, X3, Y3^X8], // 124
    [Z0^X4^Y4, X2, Y2, Y3^X7], // 125
    [Y4^X5^Y5, Z0^X4^Y4, X5, Y5], // 126
    [Y4^X5^Y5, Z0^X4^Y4, Y3, X5], // 127
    [Y4^X5^Y5, Z0^X4^Y4, X3, Y3], // 128
    [Y4^X5^Y5, Z0^X4^Y4, Y2, X3], // 129
    [Y4^X5^Y5, Z0^X4^Y4, X2, Y2], // 130
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y5], // 131
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y3], // 132
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, X3], // 133
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y2], // 134
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, X2], // 135
    [Y4^X6^Y6, Z1^X4^Y4, X5, X6], // 136
    [Y4^X6^Y6, Z1^X4^Y4, Y3, X5], // 137
    [Y4^X6^Y6, Z1^X4^Y4, X3, Y3], // 138
    [Y4^X6^Y6, Z1^X4^Y4, Y2, X3], // 139
    [Y4^X6^Y6, Z1^X4^Y4, X2, Y2], // 140
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5], // 141
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y3], // 142
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X3], // 143
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y2], // 144
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X2], // 145
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X5^Y6], // 146
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X6], // 147
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, Y3], // 148
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X3], // 149
    [Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Y2], // 150
    [Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, X2], // 151
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X5^Y6], // 152
    [Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Z0^X5^Y6], // 153
    [Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X5^Y7], // 154
    [Y4^X8^Y8, Z3^X4^Y4, Z2^Y5^X7, Z1^X5^Y7], // 155
    [Y4^X8^Y8, Z2^X4^Y4, Z1^Y5^X7, Z0^X5^Y7], // 156
    [Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, X5^Y8], // 157
    [Y4^X9^Y9, Z3^X4^Y4, Z2^Y5^X8, Z1^X5^Y8], // 158
    [Y4^X9^Y9, Z2^X4^Y4, Z1^Y5^X8, Z0^X5^Y8], // 159
    [Y3, X4, Y4^X8, Y5^X7], // 160
    [X3, Y3, Y4^X7, X4^Y7], // 161
    [X2, Y2, Y3^X6, X3^Y7], // 162
    [Z0^X4^Y4, Y3, Y4, Y5^X8], // 163
    [Z0^X4^Y4, X2, X3, Y3^X8], // 164
    [Y4^X5^Y5, Z0^X4^Y4, X2, X3], // 165
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X2^X5^Y6], // 166
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y1^X5^Y6], // 167
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X2], // 168
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, Y1^X5^Y6], // 169
    [Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, Y1^X5^Y7], // 170
    [Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, Y1^X5^Y8], // 171
    [Z0^X4^Y4, X3, Y3, X5^Y7], // 172
    [Y4^X5^Y5, Z0^X4^Y4, Y1^X5^Y5, X2], // 173
    [Y4^X6^Y6, Z1^X4^Y4, X2, X3], // 174
    [Y4^X6^Y6, Z0^X4^Y4, X2, X3], // 175
    [Y4^X6^Y6, Z0^X4^Y4, Y1^X5^Y5, X2], // 176
    [Y4^X6^Y6, Z0^X4^Y4, Y1^X5^Y5, X1^X5^Y6], // 177
    [Y4^X7^Y7, Z1^X4^Y4, Y1^Y5^X6, X3], // 178
    [Y4^X7^Y7, Z0^X4^Y4, Y1^Y5^X6, X3], // 179
    [Y4^X7^Y7, Z1^X4^Y4, Y1^Y5^X6, Z0^X5^Y6], // 180
    [Y4^X7^Y7, Z0^X4^Y4, Y1^Y5^X6, X1^X5^Y6], // 181
    [Y4^X8^Y8, Z1^X4^Y4, Y1^Y5^X7, Z0^X5^Y7], // 182
    [Y4^X8^Y8, Z0^X4^Y4, Y1^Y5^X7, X1^X5^Y7], // 183
    [Y4^X9^Y9, Z1^X4^Y4, Y1^Y5^X8, Z0^X5^Y8], // 184
    [Y4^X9^Y9, Z0^X4^Y4, Y1^Y5^X8, X1^X5^Y8], // 185
    [X3, Y3, Y4^X6, X4^Y7], // 186
    [Y2, X3, Y3^X6, X4^Y7], // 187
    [Z0^X4^Y4, X3, Y3, Y4^X6], // 188
    [Z0^X4^Y4, X2, X3, Y3^X7], // 189
    [Z0^X4^Y4, X2, Y2, X3^Y7], // 190
    [Y4^X5^Y5, Y0^X4^Y4, X2, X3], // 191
    [Y4^X5^Y5, Z0^X4^Y4, Y2^X5^Y5, X2], // 192
    [Y4^X5^Y5, Y0^X4^Y4, X1^X5^Y5, X2], // 193
    [Y4^X6^Y6, Z0^X4^Y4, X3, Y3], // 194
    [Y4^X6^Y6, Y0^X4^Y4, X3, Y3], // 195
    [Y4^X6^Y6, Z0^X4^Y4, Y1^X5^Y5, X3], // 196
    [Y4^X6^Y6, Y0^X4^Y4, Y1^X5^Y5, X3], // 197
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y2^X5^Y6], // 198
    [Y4^X6^Y6, Z0^X4^Y4, Y1^X5^Y5, X2^X5^Y6], // 199
    [Y4^X6^Y6, Y0^X4^Y4, Y1^X5^Y5, Y2^X5^Y6], // 200
    [Y4^X7^Y7, Y0^X4^Y4, Y1^Y5^X6, X3], // 201
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, Y2^X5^Y6], // 202
    [Y4^X7^Y7, Y0^X4^Y4, Y1^Y5^X6, X1^X5^Y6], // 203
    [Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, Y2^X5^Y7], // 204
    [Y4^X8^Y8, Y0^X4^Y4, Y1^Y5^X7, X1^X5^Y7], // 205
    [Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, X2^X5^Y7], // 206
    [Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, X2^X5^Y8], // 207
    [Y4^X9^Y9, Y0^X4^Y4, Y1^Y5^X8, X1^X5^Y8], // 208
    [Y4^X9^Y9, X4^Y4^Z4, Z3^Y5^X8, Z2^X5^Y8], // 209
    [Y2, X3, Y3^X7, Y4^X6], // 210
    [Y1, X2, Y2^X7, Y3^X6], // 211
    [Z0^X4^Y4, Y2, Y3, Y4^X7], // 212
    [Z0^X4^Y4, Y1, Y2, Y3^X6], // 213
    [Y4^X5^Y5, Z0^X4^Y4, Y1, Y2], // 214
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y1], // 215
    [Y4^X6^Y6, Z1^X4^Y4, Y1, X2], // 216
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y1], // 217
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, Y2], // 218
    [Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, Y1], // 219
    [Y1, X2, Y2^X6, X3^Y7], // 220
    [X1, Y1, X2^Y7, Y2^X6], // 221
    [Z0^X4^Y4, Y1, X2, Y2^X7], // 222
    [Z0^X4^Y4, X1, Y1, Y2^X6], // 223
    [Y4^X5^Y5, Z0^X4^Y4, Y1, X2], // 224
    [Y4^X5^Y5, Z0^X4^Y4, X1, Y1], // 225
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, X1], // 226
    [Y4^X6^Y6, Z1^X4^Y4, X1, Y1], // 227
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X1], // 228
    [Y4^X7^Y7, Z2^X4^Y4, Z1^Y5^X6, X1], // 229
    [Y0, X1, Y1^X7, Y2^X6], // 230
    [Z0^X4^Y4, Y0, Y1, Y2^X6], // 231
    [Y4^X5^Y5, Z0^X4^Y4, Y0, Y1], // 232
    [Y4^X5^Y5, Z0^X4^Y4, X5^Y5, Y0], // 233
    [Y4^X6^Y6, Z1^X4^Y4, Y0, X1], // 234
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y0], // 235
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, Y3^X5], // 236
    [Y4^X6^Y6, Z1^X4^Y4, Z0^X5^Y5, X3^Y5], // 237
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, Y1], // 238
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, X1], // 239
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, Z2^X5^Y6], // 240
    [Y4^X7^Y7, Z1^X4^Y4, Z0^Y5^X6, Y0^X5^Y6], // 241
    [Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, Z2^X5^Y7], // 242
    [Y4^X8^Y8, Z1^X4^Y4, Z0^Y5^X7, Y0^X5^Y7], // 243
    [Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, Z2^X5^Y8], // 244
    [Y4^X9^Y9, Z1^X4^Y4, Z0^Y5^X8, Y0^X5^Y8], // 245
    [Y2, X3, Z3, Y3], // 246
    [Y2, X2, Z3, Y3], // 247
    [Y2, X2, Z2, Y3], // 248
    [Y1, X2, Z2, Y2], // 249
    [Y1, X1, Z2, Y2], // 250
    [Y2^X3^Z3, X3, Z3, Y3], // 251
    [X2^Y2^Z3, X2, Z3, Y3], // 252
    [X2^Y2^Z2, X2, Z2, Y3], // 253
    [Y1^X2^Z2, X2, Z2, Y2], // 254
    [X1^Y1^Z2, X1, Z2, Y2], // 255
    [Y2^X4^Z4, X3^Y3^Z3, Z3, Y3], // 256
    [Y2^X3^Z4, X2^Y3^Z3, Z3, Y3], // 257
    [Y2^X3^Z3, X2^Z2^Y3, Z2, Y3], // 258
    [Y1^X3^Z3, X2^Y2^Z2, Z2, Y2], // 259
    [Y1^X2^Z3, X1^Y2^Z2, Z2, Y2], // 260
    [Y2^X5^Z5, X3^Y4^Z4, Y3^Z3^X4, Y3], // 261
    [Y2^X4^Z5, X2^Y4^Z4, X3^Y3^Z3, Y3], // 262
    [Y2^X4^Z4, X2^Z3^Y4, Z2^X3^Y3, Y3], // 263
    [Y1^X4^Z4, X2^Y3^Z3, Y2^Z2^X3, Y2], // 264
    [Y1^X3^Z4, X1^Y3^Z3, X2^Y2^Z2, Y2], // 265
    [Y2^X6^Z6, X3^Y5^Z5, Z3^Y4^X5, Y3^X4^Z4], // 266
    [Y2^X5^Z6, X2^Y5^Z5, Z3^X4^Y4, X3^Y3^Z4], // 267
    [Y2^X5^Z5, X2^Z4^Y5, Z2^X4^Y4, X3^Y3^Z3], // 268
    [Y1^X5^Z5, X2^Y4^Z4, Z2^Y3^X4, Y2^X3^Z3], // 269
    [Y1^X4^Z5, X1^Y4^Z4, Z2^X3^Y3, X2^Y2^Z3], // 270
    [Y2^X7^Z7, X3^Y6^Z6, Z3^Y5^X6, Y3^X5^Z5], // 271
    [Y2^X6^Z7, X2^Y6^Z6, Z3^X5^Y5, Y3^X4^Z5], // 272
    [Y2^X6^Z6, X2^Z5^Y6, Z2^X5^Y5, Y3^X4^Z4], // 273
    [Y1^X6^Z6, X2^Y5^Z5, Z2^Y4^X5, Y2^X4^Z4], // 274
    [Y1^X5^Z6, X1^Y5^Z5, Z2^X4^Y4, Y2^X3^Z4], // 275
    [Y2^X8^Z8, X3^Y7^Z7, Z3^Y6^X7, Y3^X6^Z6], // 276
    [Y2^X7^Z8, X2^Y7^Z7, Z3^X6^Y6, Y3^X5^Z6], // 277
    [Y2^X7^Z7, X2^Z6^Y7, Z2^X6^Y6, Y3^X5^Z5], // 278
    [Y1^X7^Z7, X2^Y6^Z6, Z2^Y5^X6, Y2^X5^Z5], // 279
    [Y1^X6^Z7, X1^Y6^Z6, Z2^X5^Y5, Y2^X4^Z5], // 280
    [Y2^X5, X3^Y4^Z4, Y3^Z3^X4, Y3], // 281
    [Y2^X4, X2^Y4^Z4, X3^Y3^Z3, Y3], // 282
    [Y2^X4, X2^Z3^Y4, Z2^X3^Y3, Y3], // 283
    [Y1^X4, X2^Y3^Z3, Y2^Z2^X3, Y2], // 284
    [Y1^X3, X1^Y3^Z3, X2^Y2^Z2, Y2], // 285
    [Y2, X3, Z3^Y4^X5, Y3^X4^Z4], // 286
    [Y2, X2, Z3^X4^Y4, X3^Y3^Z4], // 287
    [Y2, X2, Z2^X4^Y4, X3^Y3^Z3], // 288
    [Y1, X2, Z2^Y3^X4, Y2^X3^Z3], // 289
    [Y1, X1, Z2^X3^Y3, X2^Y2^Z3], // 290
    [Y2, X3, Z3, Y3^X5], // 291
    [Y2, X2, Z3, Y3^X4], // 292
    [Y2, X2, Z2, Y3^X4], // 293
    [Y1, X2, Z2, Y2^X4], // 294
    [Y1, X1, Z2, Y2^X3], // 295
    [X4^Y4, Y2, Z3, Y3], // 296
    [X4^Y4, Y2, Z2, Y3], // 297
    [X4^Y4, Y1, Z2, Y2], // 298
    [Y1^X4^Y4, X1, Z2, Y2], // 299
    [Y4^X5^Y5, X4^Y4, Y2, Z3], // 300
    [Y4^X5^Y5, X4^Y4, Y2, Z2], // 301
    [Z3^Y4^X5^Y5, X4^Y4, Y1, Z2], // 302
    [Z3^Y4^X5^Y5, Y1^X4^Y4, X1, Z2], // 303
    [Y4^X5^Y5, X4^Y4, Z3^X5, Y2], // 304
    [Y4^X5^Y5, X4^Y4, Z2^X5, Y2], // 305
    [Z3^Y4^X5^Y5, X4^Y4, Z2^X5, Y1], // 306
    [Z3^Y4^X5^Y5, Y1^X4^Y4, Z2^X5, X1], // 307
    [Y4^X6^Y6, X4^Y4, Y2, Y3], // 308
    [Y4^X6^Y6, X4^Y4, Z3, Y3], // 309
    [Y4^X6^Y6, X4^Y4, Z2, Y3], // 310
    [Z3^Y4^X6^Y6, X4^Y4, Z2, Y2], // 311
    [Z3^Y4^X6^Y6, Y1^X4^Y4, Z2, Y2], // 312
    [Y4^X6^Y6, X4^Y4, X5^Y5, Y2], // 313
    [Y4^X6^Y6, X4^Y4, Y2^X5^Y5, Z3], // 314
    [Y4^X6^Y6, X4^Y4, Y2^X5^Y5, Z2], // 315
    [Z3^Y4^X6^Y6, X4^Y4, Y1^X5^Y5, Z2], // 316
    [Z3^Y4^X6^Y6, Y1^X4^Y4, X1^X5^Y5, Z2], // 317
    [Y4^X6^Y6, X4^Y4, X5^Y5, Z3^X6], // 318
    [Y4^X6^Y6, X4^Y4, Y2^X5^Y5, Z3^X6], // 319
    [Y4^X6^Y6, X4^Y4, Y2^X5^Y5, Z2^X6], // 320
    [Z3^Y4^X6^Y6, X4^Y4, Y1^X5^Y5, Z2^X6], // 321
    [Z3^Y4^X6^Y6, Y1^X4^Y4, X1^X5^Y5, Z2^X6], // 322
    [Y4^X7^Y7, X4^Y4, Y2^Y5^X6, Y3], // 323
    [Z3^Y4^X7^Y7, X4^Y4, Y1^Y5^X6, Y2], // 324
    [Z3^Y4^X7^Y7, Y1^X4^Y4, X1^Y5^X6, Y2], // 325
    [Y4^X7^Y7, X4^Y4, Y2^Y5^X6, X5^Y6], // 326
    [Y4^X7^Y7, X4^Y4, Y2^Y5^X6, Z3^X5^Y6], // 327
    [Y4^X7^Y7, X4^Y4, Y2^Y5^X6, Z2^X5^Y6], // 328
    [Z3^Y4^X7^Y7, X4^Y4, Y1^Y5^X6, Z2^X5^Y6], // 329
    [Z3^Y4^X7^Y7, Y1^X4^Y4, X1^Y5^X6, Z2^X5^Y6], // 330
    [Y4^X7^Y7, X4^Y4, Y2^Y5^X6, Y3^X5^Y6], // 331
    [Z3^Y4^X7^Y7, X4^Y4, Y1^Y5^X6, Y2^X5^Y6], // 332
    [Z3^Y4^X7^Y7, Y1^X4^Y4, X1^Y5^X6, Y2^X5^Y6], // 333
    [Y4^X8^Y8, X4^Y4, Y2^Y5^X7, X5^Y7], // 334
    [Y4^X8^Y8, X4^Y4, Y2^Y5^X7, Z3^X5^Y7], // 335
    [Y4^X8^Y8, X4^Y4, Y2^Y5^X7, Z2^X5^Y7], // 336
    [Z3^Y4^X8^Y8, X4^Y4, Y1^Y5^X7, Z2^X5^Y7], // 337
    [Z3^Y4^X8^Y8, Y1^X4^Y4, X1^Y5^X7, Z2^X5^Y7], // 338
    [Y4^X8^Y8, X4^Y4, Y2^Y5^X7, Y3^X5^Y7], // 339
    [Z3^Y4^X8^Y8, X4^Y4, Y1^Y5^X7, Y2^X5^Y7], // 340
    [Z3^Y4^X8^Y8, Y1^X4^Y4, X1^Y5^X7, Y2^X5^Y7], // 341
    [Y4^X9^Y9, X4^Y4, Y2^Y5^X8, X5^Y8], // 342
    [Y4^X9^Y9, X4^Y4, Y2^Y5^X8, Z3^X5^Y8], // 343
    [Y4^X9^Y9, X4^Y4, Y2^Y5^X8, Z2^X5^Y8], // 344
    [Z3^Y4^X9^Y9, X4^Y4, Y1^Y5^X8, Z2^X5^Y8], // 345
    [Z3^Y4^X9^Y9, Y1^X4^Y4, X1^Y5^X8, Z2^X5^Y8], // 346
];

pub(crate) const NIBBLE3: [[u64; 4]; 409] = [
    [0, 0, 0, 0], // 0
    [Y6, X6, Y7, X7], // 1
    [Y5, X6, Y6, X7], // 2
    [Y5, X5, Y6, X6], // 3
    [Y4, X5, Y5, X6], // 4
    [Y4, X4, Y5, X5], // 5
    [Z0^X6^Y6, X6, Y7, X7], // 6
    [Z0^Y5^X6, X6, Y6, X7], // 7
    [Z0^X5^Y5, X5, Y6, X6], // 8
    [Z0^Y4^X5, X5, Y5, X6], // 9
    [Z0^X4^Y4, X4, Y5, X5], // 10
    [Z1^Y6^X7, Z0^X6^Y7, Y7, X7], // 11
    [Z1^Y5^X7, Z0^X6^Y6, Y6, X7], // 12
    [Z1^Y5^X6, Z0^X5^Y6, Y6, X6], // 13
    [Z1^Y4^X6, Z0^X5^Y5, Y5, X6], // 14
    [Z1^Y4^X5, Z0^X4^Y5, Y5, X5], // 15
    [X6^Y6, X6, Y7, X7], // 16
    [Y5^X6, X6, Y6, X7], // 17
    [X5^Y5, X5, Y6, X6], // 18
    [Y4^X5, X5, Y5, X6], // 19
    [X4^Y4, X4, Y5, X5], // 20
    [Y6^X7, X6^Y7, Y7, X7], // 21
    [Y5^X7, X6^Y6, Y6, X7], // 22
    [Y5^X6, X5^Y6, Y6, X6], // 23
    [Y4^X6, X5^Y5, Y5, X6], // 24
    [Y4^X5, X4^Y5, Y5, X5], // 25
    [X6^Y7, Y6^X7, X7, Y7], // 26
    [X5^Y6, Y5^X6, X6, Y6], // 27
    [Y4^X6, X5^Y6, Y5, X6], // 28
    [X4^Y6, Y4^X5, X5, Y5], // 29
    [X6^Y8, Y6^X8, X7^Y7, Y7], // 30
    [X6^Y7, Y5^X8, Y6^X7, Y6], // 31
    [X5^Y7, Y5^X7, X6^Y6, Y6], // 32
    [X5^Y7, Y4^X7, X6^Y6, Y5], // 33
    [X3^Y7, Y4^X6, X5^Y6, Y5], // 34
    [X6^Y9, Y6^X9, X7^Y8, Y7^X8], // 35
    [X6^Y8, Y5^X9, X7^Y7, Y6^X8], // 36
    [X5^Y8, Y5^X8, X6^Y7, Y6^X7], // 37
    [Y3^X8, X5^Y7, X6^Y6, Y5^X7], // 38
    [Y3^X7, X3^Y7, X5^Y6, Y5^X6], // 39
    [X6, Y6^X9, X7^Y8, Y7^X8], // 40
    [Y5, X6^Y8, X7^Y7, Y6^X8], // 41
    [Y3, Y5^X8, X6^Y7, Y6^X7], // 42
    [X3, Y3^X8, X6^Y6, Y5^X7], // 43
    [Y2, Y3^X7, X3^Y6, Y5^X6], // 44
    [Y6^X9, X7^Y8, Y7^X8, Z0^X5^Y5], // 45
    [X6^Y8, Y6^X8, X7^Y7, Z0^X5^Y5], // 46
    [X5^Y8, X6^Y7, Y6^X7, Z0^X5^Y5], // 47
    [Y3^X7, X5^Y7, X6^Y6, Z0^X5^Y5], // 48
    [X3^Y7, Y3^X6, X5^Y6, Z0^X5^Y5], // 49
    [X5, X6^Y8, Y6^X8, X7^Y7], // 50
    [Y3, X5^Y8, X6^Y7, Y6^X7], // 51
    [X3, Y3^X7, X5^Y7, X6^Y6], // 52
    [Y2, X3^Y7, Y3^X6, X5^Y6], // 53
    [X6, Y6, X7^Y8, Y7^X8], // 54
    [Y3, X6, Y6^X8, X7^Y7], // 55
    [X3, Y3, X6^Y7, Y6^X7], // 56
    [Y2, X3, Y3^X7, X6^Y6], // 57
    [X2, Y2, X3^Y6, Y3^X6], // 58
    [Y6, X7^Y8, Y7^X8, X5^Y6], // 59
    [X6, X7^Y7, Y6^X8, X5^Y6], // 60
    [Y3, X6^Y7, Y6^X7, X5^Y6], // 61
    [X3, Y3^X7, X6^Y6, Z0^X5^Y6], // 62
    [Y2, Y3^X6, X3^Y6, Z0^X5^Y6], // 63
    [Y3, X6, X7^Y7, Y6^X8], // 64
    [X2, Y2, Y3^X6, X3^Y6], // 65
    [X6^Y6, Y6, X7, Y7^X8], // 66
    [X6^Y6, Y3, Y6, X7^Y7], // 67
    [X6^Y6, X3, Y3, Y6^X7], // 68
    [X6^Y6, Y2, X3, Y3^X7], // 69
    [X3^Y6, X2, Y2, Y3^X6], // 70
    [X6, X7, Y7^X8, X6^Y6], // 71
    [Y3, X6, X7^Y7, X6^Y6], // 72
    [X3, Y3, X6^Y7, X6^Y6], // 73
    [Y2, X3, Y3^X7, Z0^X6^Y6], // 74
    [X2, X3, Y3^X6, Y2^X6^Y6], // 75
    [X6^Y6, X6, X7, Y7^X8], // 76
    [X6^Y6, Y3, X6, X7^Y7], // 77
    [X6^Y6, X3, Y3, X6^Y7], // 78
    [Z0^X6^Y6, Y2, X3, Y3^X7], // 79
    [Y2^X6^Y6, X2, X3, Y3^X6], // 80
    [X6^Y6, X6^Y8, X7, Y7], // 81
    [X6^Y6, X6^Y8, Y3, X7], // 82
    [X6^Y6, X6^Y8, X3, Y3], // 83
    [Z0^X6^Y6, X3^Y8, Y2, Y3], // 84
    [Y2^X6^Y6, X3^Y8, X2, Y3], // 85
    [Y6^X7, X7, Y7, X6^Y7], // 86
    [Y6^X7, Y3, X7, X6^Y7], // 87
    [Y6^X7, X3, Y3, X6^Y7], // 88
    [Y2^Y6^X7, X3, Y3, Z0^X6^Y7], // 89
    [Y2^Y6^X7, X3, Y3, X2^X6^Y7], // 90
    [Y6^X7, X6^Y7, X7, Y7], // 91
    [Y6^X7, X6^Y7, Y3, X7], // 92
    [Y6^X7, X6^Y7, X3, Y3], // 93
    [Y2^Y6^X7, Z0^X6^Y7, X3, Y3], // 94
    [Y2^Y6^X7, X2^X6^Y7, X3, Y3], // 95
    [X5^Y7, X6^Y6, X6, Y7], // 96
    [Y5^X6, X5^Y6, Y6, Y2^X6], // 97
    [Y4^X6, X5^Y6, Y5, X2^X6], // 98
    [Y4^X5, X4^Y6, Y5, Y1^X5], // 99
    [X5^Y8, Y6^X7, X6^Y7, Y7], // 100
    [Y5^X7, X5^Y7, X6^Y6, Y2^X6], // 101
    [Y4^X7, X5^Y6, Y5^X6, Y2^X6], // 102
    [Y4^X6, X3^Y6, X5^Y5, Y1^X5], // 103
    [Y5^X9, Y6^X8, X6^Y8, X7^Y7], // 104
    [Y5^X8, X5^Y8, Y6^X7, Y2^X6^Y7], // 105
    [Y3^X8, X5^Y7, Y5^X7, Y2^X6^Y6], // 106
    [Y3^X7, X3^Y7, Y5^X6, Y1^X5^Y6], // 107
    [X5, Y6^X8, X6^Y8, X7^Y7], // 108
    [Y3, X5^Y8, Y6^X7, Y2^X6^Y7], // 109
    [X3, Y3^X7, X5^Y7, Y2^X6^Y6], // 110
    [Y2, Y3^X6, X3^Y7, Y1^X5^Y6], // 111
    [Y6^X8, X6^Y8, X7^Y7, Z0^X5^Y5], // 112
    [X5^Y8, Y6^X7, Y2^X6^Y7, Z0^X5^Y5], // 113
    [Y3^X7, X5^Y7, X2^X6^Y6, Z0^X5^Y5], // 114
    [Y3^X6, X3^Y7, Y1^X5^Y6, Z0^X5^Y5], // 115
    [X3, Y3^X7, X5^Y7, X2^X6^Y6], // 116
    [Y3, X5, X6^Y8, X7^Y7], // 117
    [X3, Y3, X5^Y8, X6^Y7], // 118
    [X3, Y3, X5^Y8, Y2^X6^Y7], // 119
    [Y2, X3, Y3^X6, X5^Y6], // 120
    [X2, Y2, Y3^X5, X3^Y6], // 121
    [X6, Y6^X8, X7^Y7, X5^Y6], // 122
    [Y3, Y6^X7, Y2^X6^Y7, X5^Y6], // 123
    [X3, Y3^X7, Y2^X6^Y6, Z0^X5^Y6], // 124
    [X3, Y3^X7, Y2^X6^Y6, Y1^X5^Y6], // 125
    [X3, Y3, Y6^X7, Y2^X6^Y7], // 126
    [X2, X3, Y3^X7, Y2^X6^Y6], // 127
    [X6^Y6, X3, Y3, Y2^X6^Y7], // 128
    [X3, Y3, Y2^X6^Y7, X6^Y6], // 129
    [X3, Y3, X2^X6^Y7, Y2^X6^Y6], // 130
    [Y2^X6^Y6, X3, Y3, X2^X6^Y7], // 131
    [X6^Y6, X6^Y8, Y3, Y7], // 132
    [X6^Y6, Y2^X6^Y8, X3, Y3], // 133
    [Y2^X6^Y6, X2^X6^Y8, X3, Y3], // 134
    [Y6^X7, Y3, Y7, X6^Y7], // 135
    [Y6^X7, X3, Y3, Y2^X6^Y7], // 136
    [Y6^X7, X6^Y7, Y3, Y7], // 137
    [Y6^X7, Y2^X6^Y7, X3, Y3], // 138
    [X5^Y6, Y5^X6, X6, Y2^Y6], // 139
    [X5^Y6, Y5^X6, X2^X6, Y2^Y6], // 140
    [Y4^X6, X5^Y6, X2^X6, Y1^Y5], // 141
    [X4^Y6, Y4^X5, X1^X5, Y1^Y5], // 142
    [Y4^X8, X6^Y6, Y5^X7, Y2^X7], // 143
    [X5^Y6, Y5^X7, X2^X6^Y6, Y2^X6], // 144
    [X5^Y6, Y4^X7, X2^Y5^X6, Y1^X6], // 145
    [X3^Y6, Y4^X6, X1^X5^Y5, Y1^X5], // 146
    [X5^Y8, X6^Y7, Y5^X8, Y2^Y6^X7], // 147
    [X5^Y8, Y5^X8, X2^Y6^X7, Y2^X6^Y7], // 148
    [Y3^X8, X5^Y7, X2^Y5^X7, Y1^X6^Y6], // 149
    [Y3^X7, X3^Y7, X1^Y5^X6, Y1^X5^Y6], // 150
    [Y3, X6^Y7, Y5^X8, Y2^Y6^X7], // 151
    [Y3, Y5^X8, X2^Y6^X7, Y2^X6^Y7], // 152
    [X3, Y3^X8, X2^Y5^X7, Y1^X6^Y6], // 153
    [Y2, Y3^X6, X3^Y6, X1^X5^Y5], // 154
    [X5^Y8, X6^Y7, Y2^Y6^X7, Z0^X5^Y5], // 155
    [X5^Y8, X2^X6^Y7, Y2^Y6^X7, Z0^X5^Y5], // 156
    [Y3^X8, Y2^Y5^X7, Y1^X6^Y6, Z0^X5^Y5], // 157
    [Y3^X7, Y2^X6^Y6, X1^X5^Y7, Y1^X5^Y5], // 158
    [Y3, X5^Y8, X6^Y7, Y2^Y6^X7], // 159
    [Y3, X5^Y8, X2^X6^Y7, Y2^Y6^X7], // 160
    [X3, Y3^X8, Y2^Y5^X7, Y1^X6^Y6], // 161
    [X3, Y3^X7, Y2^X6^Y6, X1^X5^Y7], // 162
    [X3, Y3, X6^Y7, Y2^Y6^X7], // 163
    [X3, Y3, X2^X6^Y7, Y2^Y6^X7], // 164
    [X2, X3, Y3^X7, Y2^Y5^X6], // 165
    [X2, X3, Y3^X6, Y2^X5^Y6], // 166
    [Y3, X6^Y7, Y2^Y6^X7, X5^Y6], // 167
    [Y3, X2^Y6^X7, Y2^X6^Y7, X5^Y6], // 168
    [Y3, X2^Y6^X7, Y2^X6^Y7, Z0^X5^Y6], // 169
    [Y3, X2^Y6^X7, Y2^X6^Y7, X1^X5^Y6], // 170
    [X3, Y3, X2^Y6^X7, Y2^X6^Y7], // 171
    [X6^Y6, X3, Y3, Y2^Y6^X7], // 172
    [Y2^X6^Y6, X3, Y3, X2^X6^Y6], // 173
    [X3, Y3, Y2^Y6^X7, X6^Y6], // 174
    [Y2^Y6^X7, X3, Y3, X6^Y7], // 175
    [Y2^Y6^X7, X6^Y7, X3, Y3], // 176
    [X5^Y5, Y1^X5^Y6, X2^X6, Y2^Y6], // 177
    [Y4^X5, X1^X5^Y6, Y1^Y5, X2^X6], // 178
    [Y4^X5, Y0^X4^Y6, X1^X5, Y1^Y5], // 179
    [X5^Y5, Y1^X5^Y7, X2^X6^Y6, Y2^Y6], // 180
    [Y4^X6, Y1^X5^Y6, X1^X5^Y5, Y2^X6], // 181
    [Y3^X6, Y0^X4^Y6, X1^Y4^X5, Y1^X5], // 182
    [Y5^X8, Y1^X5^Y8, X2^X6^Y7, Y2^Y6^X7], // 183
    [Y3^X8, Y1^X5^Y7, X1^Y5^X7, Y2^X6^Y6], // 184
    [Y3^X7, Y1^X4^Y7, Y2^X5^Y6, X1^Y5^X6], // 185
    [Y3, X5^Y8, X2^Y6^X7, Y2^X6^Y7], // 186
    [Y3, Y1^X5^Y8, X2^X6^Y7, Y2^Y6^X7], // 187
    [X3, Y3^X7, Y1^X5^Y6, X1^Y5^X6], // 188
    [X3, Y3^X6, Y1^X4^Y6, Y2^X5^Y5], // 189
    [Y1^X5^Y8, X2^X6^Y7, Y2^Y6^X7, Z0^X5^Y5], // 190
    [X1^X5^Y8, Y2^Y6^X7, X2^X6^Y7, Y1^X5^Y5], // 191
    [X1^X5^Y8, X2^X6^Y7, Y2^Y6^X7, Y1^X5^Y5], // 192
    [Y3, X1^X5^Y8, Y2^Y6^X7, X2^X6^Y7], // 193
    [Y3, X1^X5^Y8, X2^X6^Y7, Y2^Y6^X7], // 194
    [X3, Y3, Y1^X5^Y7, X2^X6^Y6], // 195
    [X3, Y3, X1^X5^Y7, Y2^X6^Y6], // 196
    [X3, Y3, X1^X5^Y7, X2^X6^Y6], // 197
    [Y3, X2^Y6^X7, Y1^X6^Y7, Y2^X5^Y6], // 198
    [X3, Y3, X2^Y6^X7, Y1^X6^Y7], // 199
    [X2^X6^Y6, X3, Y3, Y1^X6^Y6], // 200
    [X2^X6^Y6, X3, Y3, Y2^X6^Y6], // 201
    [X3, Y3, Y1^X6^Y7, X2^X6^Y6], // 202
    [Y2^X6^Y6, X3, Y3, Y1^X6^Y7], // 203
    [Y2^X6^Y6, Y1^X6^Y8, X3, Y3], // 204
    [Y2^Y6^X7, X3, Y3, Y1^X6^Y7], // 205
    [X6, Y6^X10, X7^Y9, Y7^X9], // 206
    [Y5, X6^Y9, X7^Y8, Y6^X9], // 207
    [Y3, Y5^X9, X6^Y8, Y6^X8], // 208
    [X3, Y3^X9, X6^Y7, Y5^X8], // 209
    [Y2, Y3^X8, X3^Y7, Y5^X7], // 210
    [Y6^X10, X7^Y9, Y7^X9, X8^Y8], // 211
    [X5^Y9, X6^Y8, Y6^X8, X7^Y7], // 212
    [Y3^X8, X5^Y8, X6^Y7, Y6^X7], // 213
    [X3^Y8, Y3^X7, X5^Y7, X6^Y6], // 214
    [X5, X6^Y9, Y6^X9, X7^Y8], // 215
    [Y3, X5^Y9, X6^Y8, Y6^X8], // 216
    [X3, Y3^X8, X5^Y8, X6^Y7], // 217
    [Y2, X3^Y8, Y3^X7, X5^Y7], // 218
    [X6, Y6, X7^Y10, Y7^X10], // 219
    [Y3, X6, Y6^X10, X7^Y9], // 220
    [X3, Y3, X6^Y9, Y6^X9], // 221
    [Y2, X3, Y3^X9, X6^Y8], // 222
    [X2, Y2, X3^Y8, Y3^X8], // 223
    [Y6, X7^Y10, Y7^X10, X8^Y9], // 224
    [X6, X7^Y9, Y6^X10, X8^Y8], // 225
    [Y3, X6^Y9, Y6^X9, X7^Y8], // 226
    [X3, Y3^X9, X6^Y8, X7^Y7], // 227
    [Y2, Y3^X8, X3^Y8, X6^Y7], // 228
    [Y3, X6, X7^Y9, Y6^X10], // 229
    [X2, Y2, Y3^X8, X3^Y8], // 230
    [X6^Y6, Y6, X7, Y7^X10], // 231
    [X6^Y6, Y3, Y6, X7^Y9], // 232
    [X6^Y6, X3, Y3, Y6^X9], // 233
    [X6^Y6, Y2, X3, Y3^X9], // 234
    [X6^Y6, X2, Y2, Y3^X8], // 235
    [X6, X7, Y7^X10, X8^Y9], // 236
    [Y3, X6, X7^Y9, Y7^X9], // 237
    [X3, Y3, X6^Y9, X7^Y8], // 238
    [Y2, X3, Y3^X8, X6^Y8], // 239
    [X2, Y2, X3^Y8, Y3^X7], // 240
    [X6^Y6, X6, X7, Y7^X10], // 241
    [X6^Y6, Y3, X6, X7^Y9], // 242
    [X6^Y6, X3, Y3, X6^Y9], // 243
    [Z0^X6^Y6, Y2, X3, Y3^X8], // 244
    [Z0^X6^Y6, X2, Y2, X3^Y8], // 245
    [Z0^X6^Y6, X6^Y8, Y2, X3], // 246
    [Z0^X6^Y6, X6^Y8, X2, Y2], // 247
    [Y6^X7, X7, Y7, X8^Y9], // 248
    [Y6^X7, Y3, X7, X8^Y8], // 249
    [Y6^X7, X3, Y3, X7^Y8], // 250
    [Z1^Y6^X7, Y2, X3, Y3^X8], // 251
    [Z1^Y6^X7, X2, Y2, Y3^X7], // 252
    [Z1^Y6^X7, Z0^X6^Y7, Y2, X3], // 253
    [Z1^Y6^X7, Z0^X6^Y7, X2, Y2], // 254
    [X4^Y6, X5^Y5, X5, Y6], // 255
    [X3^Y6, Y4^X5, X4, Y5], // 256
    [X3^Y7, Y5^X6, X5^Y6, Y6], // 257
    [X2^Y7, Y4^X5, X3^Y6, Y5], // 258
    [Y3^X8, Y5^X7, X5^Y7, X6^Y6], // 259
    [Y3^X6, X2^Y7, X3^Y6, X5^Y5], // 260
    [X5, Y6^X9, X6^Y9, Y7^X8], // 261
    [X3, Y3^X8, X5^Y8, Y6^X7], // 262
    [Y2, Y3^X7, X3^Y8, X5^Y7], // 263
    [Y2, Y3^X6, X2^Y8, X3^Y7], // 264
    [Y6^X9, X6^Y9, Y7^X8, X7^Y8], // 265
    [Y3^X8, X5^Y8, Y6^X7, X6^Y7], // 266
    [Y2^X7, Y3^X6, X3^Y7, X5^Y6], // 267
    [X2, Y2^X7, Y3^X6, X3^Y7], // 268
    [Y3, X5, X6^Y10, Y7^X9], // 269
    [X3, Y3, X5^Y10, X6^Y9], // 270
    [Y2, X3, Y3^X8, X5^Y9], // 271
    [X2, Y2, X3^Y9, Y3^X7], // 272
    [Y1, X2, Y2^X7, Y3^X6], // 273
    [X6, Y6^X10, Y7^X9, X7^Y9], // 274
    [X3, Y3^X9, Y6^X8, X6^Y8], // 275
    [Y2, Y3^X7, X2^Y8, X3^Y7], // 276
    [Y3, X6, Y6^X10, Y7^X9], // 277
    [Y2, X3, Y3^X9, Y6^X8], // 278
    [Y1, Y2, Y3^X7, X2^Y8], // 279
    [X6^Y6, Y3, X6, Y7^X9], // 280
    [X6^Y6, Y2, X3, Y3^X8], // 281
    [X6^Y6, X2, Y2, Y3^X7], // 282
    [X6^Y6, Y1, Y2, Y3^X6], // 283
    [Y3, X6, Y7^X9, X7^Y9], // 284
    [Z0^X6^Y6, Y1, X2, Y2^X7], // 285
    [X6^Y6, X6^Y8, Y2, X3], // 286
    [Z0^X6^Y6, X3^Y8, Y1, X2], // 287
    [Y6^X7, Y3, X7, Y7^X9], // 288
    [Y6^X7, Y2, X3, Y3^X8], // 289
    [Z0^Y6^X7, X2, Y2, Y3^X7], // 290
    [Z0^Y6^X7, X2, X3, Y3^X8], // 291
    [Y6^X7, X6^Y7, Y2, X3], // 292
    [Z0^Y6^X7, Z4^X6^Y7, X2, Y2], // 293
    [Z0^Y6^X7, Y1^X6^Y7, X2, X3], // 294
    [Y3^X5, X4^Y6, Y4, X5], // 295
    [X3^Y6, Y3^X5, X4, Y4], // 296
    [X3^Y7, Y3^X6, X5^Y6, Y4], // 297
    [X2^Y7, Y3^X5, X3^Y6, Y4], // 298
    [Y2^X7, X3^Y7, Y3^X6, X5^Y6], // 299
    [Y2^X6, X2^Y7, Y3^X5, X3^Y6], // 300
    [X2, Y2^X8, X3^Y7, Y3^X7], // 301
    [Y1, Y2^X6, X2^Y7, Y3^X5], // 302
    [X2^Y7, Y2^X6, X3^Y6, Y3^X5], // 303
    [X2, Y2^X7, X3^Y7, Y3^X6], // 304
    [Y1, X2^Y7, Y2^X6, X3^Y6], // 305
    [Y1, X2, Y2^X8, X3^Y7], // 306
    [X1, Y1, X2^Y7, Y2^X7], // 307
    [Y1, Y2^X7, X2^Y7, Y3^X6], // 308
    [X1, Y1, Y2^X7, X2^Y7], // 309
    [X6^Y6, Y1, X2, Y2^X8], // 310
    [X3^Y6, X1, Y1, Y2^X7], // 311
    [Y1, X2, Y2^X8, Y3^X7], // 312
    [X2, Y2, Y3^X7, X3^Y8], // 313
    [X6^Y6, X2, Y2, X3^Y8], // 314
    [Z3^X6^Y6, Y1, X2, Y2^X8], // 315
    [Y1^X6^Y6, X2, Y2, Y3^X7], // 316
    [X6^Y6, X6^Y8, X2, Y2], // 317
    [Z3^X6^Y6, X3^Y8, Y1, X2], // 318
    [Y1^X6^Y6, X1^X6^Y8, X2, Y2], // 319
    [Y6^X7, X2, Y2, Y3^X7], // 320
    [Y1^Y6^X7, X2, X3, Y3^X8], // 321
    [Y1^Y6^X7, X3, Y3, X2^Y7^X8], // 322
    [Y6^X7, X6^Y7, X2, Y2], // 323
    [Y1^Y6^X7, Z3^X6^Y7, X2, X3], // 324
    [Y1^Y6^X7, X1^X6^Y7, X3, Y3], // 325
    [X2^Y6, Y3^X5, X3, Y4], // 326
    [X1^Y7, Y3^X5, X2^Y6, Y4], // 327
    [Y2^X6, X1^Y7, Y3^X5, X2^Y6], // 328
    [Y1, Y2^X6, X1^Y7, Y3^X5], // 329
    [Y1^X7, Y2^X6, X2^Y6, Y3^X5], // 330
    [X1, Y1^X7, Y2^X6, X2^Y6], // 331
    [X1, Y1, X2^Y8, Y2^X6], // 332
    [Y0, X1, Y1^X7, Y2^X6], // 333
    [X2, Y2^X8, Y3^X7, X3^Y7], // 334
    [X1, X2, Y2^X8, Y3^X7], // 335
    [Y1^X6^Y6, X1, X2, Y2^X7], // 336
    [X2, X3, Y3^X8, Y2^X7^Y7], // 337
    [X6^Y6, Y1, X2, Y2^X7], // 338
    [Y1^X6^Y6, X2, X3, Y3^X8], // 339
    [X6^Y6, Y2^X6^Y8, Y1, X2], // 340
    [Y1^X6^Y6, X2^X6^Y8, Y2, X3], // 341
    [Y1^X6^Y6, Y3^X8, X2, X3], // 342
    [Y6^X7, X2, X3, Y3^X8], // 343
    [Y1^Y6^X7, X3, Y2, Y3^X8^Y8], // 344
    [Y6^X7, Y2^X6^Y7, X2, X3], // 345
    [Y1^Y6^X7, X1^X6^Y7, X3, Y2], // 346
    [X4, Z4, Y4, X5], // 347
    [X3, Z4, Y4, X4], // 348
    [X3, Z3, Y4, X4], // 349
    [X3, Z3, Y3, X4], // 350
    [X2, Z3, Y3, X3], // 351
    [X4^Y4^Z4, Z4, Y4, X5], // 352
    [X3^Y4^Z4, Z4, Y4, X4], // 353
    [X3^Z3^Y4, Z3, Y4, X4], // 354
    [X3^Y3^Z3, Z3, Y3, X4], // 355
    [X2^Y3^Z3, Z3, Y3, X3], // 356
    [X4^Y5^Z5, Y4^Z4^X5, Y4, X5], // 357
    [X3^Y5^Z5, X4^Y4^Z4, Y4, X4], // 358
    [X3^Z4^Y5, Z3^X4^Y4, Y4, X4], // 359
    [X3^Y4^Z4, Y3^Z3^X4, Y3, X4], // 360
    [X2^Y4^Z4, X3^Y3^Z3, Y3, X3], // 361
    [X4, Y4^Z4^X5, Y4, X5], // 362
    [X3, X4^Y4^Z4, Y4, X4], // 363
    [X3, Z3^X4^Y4, Y4, X4], // 364
    [X3, Y3^Z3^X4, Y3, X4], // 365
    [X2, X3^Y3^Z3, Y3, X3], // 366
    [X3, Z4, Y4, X5], // 367
    [X2, Z4, Y4, X3], // 368
    [X2, Z3, Y4, X3], // 369
    [Y3, X3, Z4, X5], // 370
    [Y3, X2, Z4, X3], // 371
    [Y3, X2, Z3, X3], // 372
    [Y2, X2, Y3, X3], // 373
    [Z3, X3, Z4, X5^Y5], // 374
    [X2, Z4, X3, Y2^X5^Y5], // 375
    [X2, Z3, X3, Y2^X5^Y5], // 376
    [X2, Y3, X3, Y1^X5^Y5], // 377
    [X2, Y3, X3, X1^X5^Y5], // 378
    [Y3, Z3, X3, Z4], // 379
    [Y2, Y3, X3, Z4], // 380
    [Z3, X3, Z4, X5^Y6], // 381
    [X2, Z4, X3, Z3^X5^Y6], // 382
    [X2, Z3, X3, Z2^X5^Y6], // 383
    [X2, Y3, X3, Z2^X5^Y6], // 384
    [Z3^X7, Y3, X3, Z4], // 385
    [Z3^X7, X2, Z4, X3], // 386
    [Z2^X7, X2, Z3, X3], // 387
    [Z2^X7, X2, Y3, X3], // 388
    [Z3, X3, Z4, Y3^X6^Y6], // 389
    [X2, Z4, X3, Y3^X6^Y6], // 390
    [X2, Z3, X3, Y3^X6^Y6], // 391
    [X2, Y3, X3, Y2^X6^Y6], // 392
    [Y3^X6^Y6, Z3, X3, Z4], // 393
    [Y3^X6^Y6, X2, Z4, X3], // 394
    [Y3^X6^Y6, X2, Z3, X3], // 395
    [Y2^X6^Y6, X2, Y3, X3], // 396
    [Y3^X6^Y6, Z3^X8, X3, Z4], // 397
    [X2^X6^Y6, Z3^X8, Z4, X3], // 398
    [X2^X6^Y6, Z2^X8, Z3, X3], // 399
    [X2^X6^Y6, Z2^X8, Y3, X3], // 400
    [Y3^Y6^X7, X3, Z4, Z3^X6^Y7], // 401
    [Y3^Y6^X7, Z4, X3, X2^X6^Y7], // 402
    [Y3^Y6^X7, Z3, X3, X2^X6^Y7], // 403
    [Y2^Y6^X7, Y3, X3, X2^X6^Y7], // 404
    [Y3^Y6^X7, Z3^X6^Y7, X3, Z4], // 405
    [Y3^Y6^X7, X2^X6^Y7, Z4, X3], // 406
    [Y3^Y6^X7, X2^X6^Y7, Z3, X3], // 407
    [Y2^Y6^X7, X2^X6^Y7, Y3, X3], // 408
];

pub(crate) const NIBBLE4: [[u64; 4]; 124] = [
    [0, 0, 0, 0], // 0
    [Y8, X8, 0, 0], // 1
    [Y7, X8, 0, 0], // 2
    [Y7, X7, 0, 0], // 3
    [Y6, X7, 0, 0], // 4
    [Y6, X6, 0, 0], // 5
    [X8, Y8, 0, 0], // 6
    [X7, Y7, 0, 0], // 7
    [X6, Y6, 0, 0], // 8
    [X8, Y7, 0, 0], // 9
    [X7, Y6, 0, 0], // 10
    [X8^Y8, Y8, 0, 0], // 11
    [Y7^X8, Y7, 0, 0], // 12
    [X7^Y7, Y7, 0, 0], // 13
    [Y6^X7, Y6, 0, 0], // 14
    [X6^Y6, Y6, 0, 0], // 15
    [Y8, Z0^X5^Y5, 0, 0], // 16
    [X8, Z0^X5^Y5, 0, 0], // 17
    [Y7, Z0^X5^Y5, 0, 0], // 18
    [X7, Z0^X5^Y5, 0, 0], // 19
    [Y6, Z0^X5^Y5, 0, 0], // 20
    [Y7^X8, X8, 0, 0], // 21
    [Y6^X7, X7, 0, 0], // 22
    [X8^Y9, Y8^X9, 0, 0], // 23
    [Y7^X9, X8^Y8, 0, 0], // 24
    [X7^Y8, Y7^X8, 0, 0], // 25
    [Y6^X8, X7^Y7, 0, 0], // 26
    [X6^Y7, Y6^X7, 0, 0], // 27
    [Y8^X9, X5^Y6, 0, 0], // 28
    [Y7^X9, X5^Y6, 0, 0], // 29
    [Y7^X8, X5^Y6, 0, 0], // 30
    [Y6^X8, Z0^X5^Y6, 0, 0], // 31
    [Y6^X7, Z0^X5^Y6, 0, 0], // 32
    [X8^Y8, Y7^X9, 0, 0], // 33
    [X7^Y7, Y6^X8, 0, 0], // 34
    [X3^Y7, Y6^X7, 0, 0], // 35
    [Y8^X9, X6^Y6, 0, 0], // 36
    [X8^Y8, X6^Y6, 0, 0], // 37
    [Y7^X8, X6^Y6, 0, 0], // 38
    [X7^Y7, Z0^X6^Y6, 0, 0], // 39
    [X6^Y7, Z0^X6^Y6, 0, 0], // 40
    [X6^Y8, X7^Y7, 0, 0], // 41
    [Y3^X7, X6^Y7, 0, 0], // 42
    [Y3^X8, X7^Y7, 0, 0], // 43
    [X3^Y7, Y3^X7, 0, 0], // 44
    [Y8^X9, X6^Y7, 0, 0], // 45
    [Y7^X9, X6^Y7, 0, 0], // 46
    [Y7^X8, X6^Y7, 0, 0], // 47
    [X7^Y7, Z0^X6^Y7, 0, 0], // 48
    [X3^Y7, Z0^X6^Y7, 0, 0], // 49
    [Y3^X7, X3^Y7, 0, 0], // 50
    [X7, Y8, 0, 0], // 51
    [X6, Y7, 0, 0], // 52
    [X5, Y6, 0, 0], // 53
    [X7^Y8, Y8, 0, 0], // 54
    [X6^Y7, Y7, 0, 0], // 55
    [X5^Y6, Y6, 0, 0], // 56
    [X7^Y9, X8^Y8, 0, 0], // 57
    [X5^Y8, X6^Y7, 0, 0], // 58
    [X3^Y8, X5^Y7, 0, 0], // 59
    [X8^Y8, X5^Y6, 0, 0], // 60
    [X7^Y7, X5^Y6, 0, 0], // 61
    [X6^Y6, Z0^X5^Y6, 0, 0], // 62
    [X3^Y7, X6^Y6, 0, 0], // 63
    [X3^Y8, X6^Y7, 0, 0], // 64
    [X2^Y8, X3^Y7, 0, 0], // 65
    [X7^Y7, X6^Y6, 0, 0], // 66
    [X3^Y7, Z0^X6^Y6, 0, 0], // 67
    [Y3^X6, X3^Y7, 0, 0], // 68
    [Y2^X7, Y3^X6, 0, 0], // 69
    [X8^Y8, X6^Y7, 0, 0], // 70
    [X7^Y7, X6^Y7, 0, 0], // 71
    [X3^Y7, Z4^X6^Y7, 0, 0], // 72
    [Y2^X7^Y7, Y1^X6^Y7, 0, 0], // 73
    [Y3^X8, Y2^X7^Y7, 0, 0], // 74
    [Y5, X6, 0, 0], // 75
    [X5, Y5, 0, 0], // 76
    [X6, Y5, 0, 0], // 77
    [X6^Y6, Y5, 0, 0], // 78
    [X3^Y6, Y5, 0, 0], // 79
    [X6, Z0^X5^Y5, 0, 0], // 80
    [X5, Z0^X5^Y5, 0, 0], // 81
    [X5^Y6, X6, 0, 0], // 82
    [Y3^X5, X5, 0, 0], // 83
    [Y3^X7, X6^Y6, 0, 0], // 84
    [X3^Y6, Y3^X6, 0, 0], // 85
    [Y6^X8, X5^Y6, 0, 0], // 86
    [Y6^X7, X5^Y6, 0, 0], // 87
    [X3^Y6, Z0^X5^Y6, 0, 0], // 88
    [Y3^X6, X3^Y6, 0, 0], // 89
    [X3^Y6, Y3^X7, 0, 0], // 90
    [X2^Y6, Y3^X6, 0, 0], // 91
    [X6^Y7, X6^Y6, 0, 0], // 92
    [X3^Y6, Z3^X6^Y6, 0, 0], // 93
    [X1^X6^Y7, Y1^X6^Y6, 0, 0], // 94
    [Y3^X7, X3^Y6, 0, 0], // 95
    [X3^Y8, X1^X6^Y7, 0, 0], // 96
    [Y2^X8, Y3^X7, 0, 0], // 97
    [X3^Y7, X6^Y7, 0, 0], // 98
    [Y2^X7^Y7, Z3^X6^Y7, 0, 0], // 99
    [Y2^X7^Y8, X1^X6^Y7, 0, 0], // 100
    [X2^Y7^X8, Y2^X7^Y8, 0, 0], // 101
    [X4, Y5, 0, 0], // 102
    [X3, Y5, 0, 0], // 103
    [X3^Y6, X5, 0, 0], // 104
    [X2^Y6, X3, 0, 0], // 105
    [X3, Z0^X5^Y5, 0, 0], // 106
    [Y3^X5, X3, 0, 0], // 107
    [X3^Y7, X5^Y6, 0, 0], // 108
    [X2^Y6, Y3^X5, 0, 0], // 109
    [X6^Y6, X5^Y6, 0, 0], // 110
    [X3^Y6, Z2^X5^Y6, 0, 0], // 111
    [Y1^X6^Y6, Y0^X5^Y6, 0, 0], // 112
    [X3^Y7, Y1^X6^Y6, 0, 0], // 113
    [X1^X6^Y8, Y1^X6^Y6, 0, 0], // 114
    [Y2^X7^Y7, X1^X6^Y8, 0, 0], // 115
    [Y3^X7, X1^X6^Y7, 0, 0], // 116
    [Y1^X7^Y7, Y2^X6^Y7, 0, 0], // 117
    [X2^Y7^X9, X1^X6^Y7, 0, 0], // 118
    [Y3^X8, Y1^X7^Y7, 0, 0], // 119
    [Y3^X8^Y8, X2^Y7^X9, 0, 0], // 120
    [Z5, Y5, 0, 0], // 121
    [Z4, Y5, 0, 0], // 122
    [Z4, Y4, 0, 0], // 123
];
