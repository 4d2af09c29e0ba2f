//! Coefficient tables for the table-driven tanh kernels.
//!
//! One row per magnitude subinterval, laid out as
//! `[offset, c_n, c_(n-1), ..., c_1, c_0]`: the range-reduction offset
//! followed by the polynomial coefficients, highest degree first, in the order
//! the Horner evaluator consumes them. Values are raw IEEE-754 bit patterns.
//!
//! Interior rows `[lo, hi)` use `hi` as their offset, so the reduced argument
//! `|x| - hi` is exact and never positive, and `c_0` is `tanh(hi)` correctly
//! rounded. Neighbouring rows meet at `hi` without a step, and adjacent inputs
//! give non-decreasing results across every row edge.
//!
//! Row 0 is the odd expansion around zero (`c_0 = 0`, `c_1 = 1`, even terms
//! zero) so tiny and subnormal inputs come back unchanged. The last row is the
//! saturation sentinel: offset 0, `c_0 = 1`, every other coefficient 0.
//!
//! Generated by `scripts/gen_tanh_tables.py`; do not edit by hand.

/// Double precision: 16 rows of offset + 17 coefficients (degree 16).
///
/// Rows 1..=14 advance in half-octave steps (0.1875, 0.25, 0.375, 0.5, ...);
/// row 15 covers `|x| >= 24`.
#[rustfmt::skip]
pub(crate) static TANH_TABLE_F64: [[u64; 18]; 16] = [
    // 0: [0, 0.1875)
    [
        0x0000000000000000, 0x0000000000000000, 0xbf56b2b48f38f5da, 0x0000000000000000,
        0x3f6d662a9269d3ff, 0x0000000000000000, 0xbf8226d8898fa336, 0x0000000000000000,
        0x3f9664f4773596c6, 0x0000000000000000, 0xbfaba1ba1b950614, 0x0000000000000000,
        0x3fc1111111110f48, 0x0000000000000000, 0xbfd5555555555555, 0x0000000000000000,
        0x3ff0000000000000, 0x0000000000000000,
    ],
    // 1: [0.1875, 0.25)
    [
        0x3fd0000000000000, 0x3f424a342449bbe7, 0x3f50d0047a62e0db, 0xbf5595e92c6c2ae3,
        0xbf5d716703580634, 0x3f716a27aa576b22, 0x3f63d854f22a2538, 0xbf888256e4887afa,
        0xbf22f7e4f4885f7f, 0x3f9f13eb670b7834, 0xbf8e574ca975bc51, 0xbfb1c382b0ed58b8,
        0x3fb28444c48d519b, 0x3fc1e0db3fefb68e, 0xbfd071e413577375, 0xbfcd78158f1b49f9,
        0x3fee149a052c16c2, 0x3fcf597ea69a1c86,
    ],
    // 2: [0.25, 0.375)
    [
        0x3fd8000000000000, 0xbf20c543fe92179c, 0x3f4e91cbe05f0d64, 0x3f43b8caa0094e13,
        0xbf63af735eec1ce6, 0x3f38962444f491e4, 0x3f78a22011d51540, 0xbf76776f1b602b81,
        0xbf87b22b656431cd, 0x3f97891902ff26a9, 0x3f8a7c69d40e3ac2, 0xbfb1d58913b0acdf,
        0x3f931a9afcba2a6e, 0x3fc584c5e7f19e94, 0xbfc6dc4f6e8f88f9, 0xbfd3fd54e226f8f8,
        0x3febe3fbb015a592, 0x3fd6ef53de8c8fb0,
    ],
    // 3: [0.375, 0.5)
    [
        0x3fe0000000000000, 0xbf3fdca3004cd4eb, 0xbf2a06698f5cf223, 0x3f51df2026152b42,
        0xbf474bbfa8d92874, 0xbf62c88b1a86d54d, 0x3f7146ab44ff86ca, 0x3f607b5f076fe912,
        0xbf8b97ec30813f3b, 0x3f806632327fe2e5, 0x3f9d49bcaa85efbe, 0xbfa9cc7d1f2fc3fe,
        0xbf9be02f7c1d097d, 0x3fc51418dc444fd5, 0xbfb81d97b8141a38, 0xbfd742740ed7f1d0,
        0x3fe92a946fa34394, 0x3fdd9353d7568af3,
    ],
    // 4: [0.5, 0.75)
    [
        0x3fe8000000000000, 0x3f02eaa2b202ab03, 0xbf3763d94bdcebb1, 0xbf340e523ae013bf,
        0x3f4a4da251f84dd4, 0xbf4779f6778e8b71, 0xbf591bcb7ee0f7a6, 0x3f721ac45840b77b,
        0xbf605c1465cdf5fb, 0xbf854b06a22ae66f, 0x3f962a65ac5411cd, 0xbf505c2561c65902,
        0xbfb064adc7a272ee, 0x3fb989565d812a1a, 0x3fa568057c923dbe, 0xbfd8403d3dda87bf,
        0x3fe3173b1efa6ef5, 0x3fe45323e552f228,
    ],
    // 5: [0.75, 1)
    [
        0x3ff0000000000000, 0x3f115f5f3228a15b, 0x3f26f6efac08c486, 0xbf175916e411fc11,
        0xbed91eebf4cf2f96, 0x3f421feb790a01a1, 0xbf50580f5c2bedc2, 0x3f1a856a838d7cda,
        0x3f6ab743fa8f1088, 0xbf7c255f64e67af4, 0x3f63f935aae9881c, 0x3f93605fdea44030,
        0xbfa7b59c0f03e1e3, 0x3f9c60915a5828d8, 0x3fba85d22eb4a3d9, 0xbfd4786c26f14a7d,
        0x3fdae0dc0f990c45, 0x3fe85efab514f394,
    ],
    // 6: [1, 1.5)
    [
        0x3ff8000000000000, 0xbeeb9d5d9a54f930, 0xbf07279beaa5c472, 0xbf008c31917cab0a,
        0xbf0b3507224bad2c, 0xbf104387ce12af9c, 0x3f259d4330f7e00b, 0xbf36759e9269c6d6,
        0x3f2983eff34efbde, 0x3f50a5c4108a7e33, 0xbf703e525cac0a97, 0x3f7d0ec3308c18d2,
        0xbf65c9d3f27afc20, 0xbf999050d675a23b, 0x3fb67b1f69149064, 0xbfc4efbd8fb38e65,
        0x3fc72165282c6f72, 0x3fecf6f9786df577,
    ],
    // 7: [1.5, 2)
    [
        0x4000000000000000, 0x3eb05784e3ca5aad, 0x3ec374c939ab54c2, 0x3eb53d9f3c7df783,
        0x3edae0bb4098a7a2, 0xbedb0a2a754c4582, 0x3ed1b1ac6d94bb0e, 0x3f0289fddcfff7d5,
        0xbf25921c40d376e8, 0x3f3c3215b9096575, 0xbf456f90145cf5f1, 0xbf24d954045a9e42,
        0x3f73957aed1c39e2, 0xbf92520da0ea81ff, 0x3fa58f4ff0eebdf6, 0xbfb16f9d2bcd3f5e,
        0x3fb2162c262e051b, 0x3feed9505e1bc3d4,
    ],
    // 8: [2, 3)
    [
        0x4008000000000000, 0xbe5667ee26d42c36, 0xbe7cd091c25b9308, 0xbe92518697d45358,
        0xbea2a9207e375dea, 0xbe9522032bd686fc, 0xbeb537f44eeaf314, 0x3eb6d0b705325d7f,
        0xbeb43d8a735ff81c, 0xbeead26aaea5a18a, 0x3f16f725807ed131, 0xbf386d025ed15810,
        0x3f53f93f234a9729, 0xbf6a03a0f2a17554, 0x3f7a8acaf7c3f84b, 0xbf841b109ca6f164,
        0x3f8434a517bbc53a, 0x3fefd77d111a0b00,
    ],
    // 9: [3, 4)
    [
        0x4010000000000000, 0x3de40ae82c3c65e1, 0x3df766d83ed96d22, 0x3e1c96283b10b57b,
        0x3dff9e359f3e779b, 0x3e30a30773af6bdc, 0x3e4c39e27f0a30a0, 0xbe80b64a9341fbdd,
        0x3eaa64cb53722470, 0xbed0585ce5dba73d, 0x3ef11ab3be819623, 0xbf0e99408e8fe041,
        0x3f27330e8f959471, 0xbf3d27f65e7c1ea8, 0x3f4d3c0e4808e5d0, 0xbf55f495227af155,
        0x3f55f85ad510b695, 0x3feffa81708a0b42,
    ],
    // 10: [4, 6)
    [
        0x4018000000000000, 0x3d691ccae14b563c, 0x3da527b2e4cfbb2e, 0x3dcd9300e0e5b8c6,
        0x3dee2b03857f5e27, 0x3dfbbeaf2c6bb4c8, 0x3e1a1082db6b983f, 0xbe23ad1ecc4bed96,
        0x3e53bd87a04124b8, 0xbe74b3fd8219698a, 0x3e94f439358522be, 0xbeb250f0ba4a7a1e,
        0x3ecb7bd05044f986, 0xbee12dc3492420f9, 0x3ef12dfb856132e5, 0xbef9c522b8c53fd6,
        0x3ef9c5377a4bd2dd, 0x3fefffe63abe253c,
    ],
    // 11: [6, 8)
    [
        0x4020000000000000, 0xbcf7346b94b5f753, 0xbd2642277c4c6df4, 0xbd53e44a969bbea2,
        0xbd62628b3ecf9533, 0xbd90f4078cdd26ad, 0x3da22701f130663c, 0xbdd29776902a96cd,
        0x3df58e796f93d013, 0xbe189869cc28dd0b, 0x3e388b50d9499822, 0xbe557b5f39574668,
        0x3e701c6f37c7e242, 0xbe8423904a4ab1b9, 0x3e9423914a206317, 0xbe9e355ad6ea9e39,
        0x3e9e355b48cc4c56, 0x3fefffff872a91f8,
    ],
    // 12: [8, 12)
    [
        0x4028000000000000, 0xbc72900f50e9407c, 0xbcbb968d8f6139e6, 0xbcf44eb8dd2b71a3,
        0xbd22398d95915f0f, 0xbd469609f4bc197c, 0xbd63a3a5df1a0dcc, 0xbd79d05e9b4b34ae,
        0xbd873d1860c2ac81, 0xbd93111cd790a3b9, 0xbd81e51f87c17c49, 0xbda52207dabc1bff,
        0x3db484fd299d1d3a, 0xbdcbf11fef24893a, 0x3ddba5123d7f0662, 0xbde4c165fe2373ac,
        0x3de4c1039d6f4530, 0x3feffffffff59f7c,
    ],
    // 13: [12, 16)
    [
        0x4030000000000000, 0xbbb983471951fd73, 0xbc02f59f029c2f91, 0xbc3be9a0e03b902b,
        0xbc690cec748576c6, 0xbc8f0ba99c54af1d, 0xbcaafed508c6c968, 0xbcc1bdd413790f8b,
        0xbccff1ae54118837, 0xbcda3545984d1767, 0xbcc89b9d022cdb5a, 0xbced0a969bc0351b,
        0x3cfc31a98fd1d3df, 0xbd133269a73f37b0, 0x3d22fe23ebc7164e, 0xbd2c84e6c5fd6c03,
        0x3d2c845f8a635cba, 0x3fefffffffffff1c,
    ],
    // 14: [16, 24)
    [
        0x4038000000000000, 0xbab3a52a1d942d45, 0xbb10edacb44bf15e, 0xbb5ac69ebd5c16cb,
        0xbb9998dc8a0cdd2c, 0xbbd071d92d475586, 0xbbfde8ff87934a2f, 0xbc23c493f234beed,
        0xbc4334597a1c86eb, 0xbc5b6e7054faa505, 0xbc6c878dbc0e2e68, 0xbc752d550b77b8e2,
        0xbc75b4d6aa84ef27, 0xbc6d2e3126d392df, 0xbc57a74d9a6054e0, 0xbc343a797d3d3e55,
        0xbbf949af34645789, 0x3ff0000000000000,
    ],
    // 15: saturation
    [
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x3ff0000000000000,
    ],
];

/// Single precision: 32 rows of offset + 7 coefficients (degree 6).
///
/// Quarter-octave steps starting at 0.0546875; row 31 covers `|x| >= 10`.
#[rustfmt::skip]
pub(crate) static TANH_TABLE_F32: [[u32; 8]; 32] = [
    // 0: [0, 0.0546875)
    [
        0x00000000, 0x00000000, 0x3e085e44, 0x00000000, 0xbeaaaaa9, 0x00000000, 0x3f800000, 0x00000000,
    ],
    // 1: [0.0546875, 0.0625)
    [
        0x3d800000, 0xbcb2539b, 0x3e040ee7, 0x3d28c9f0, 0xbea803c3, 0xbd7eabcc, 0x3f7f00aa, 0x3d7faacd,
    ],
    // 2: [0.0625, 0.078125)
    [
        0x3da00000, 0xbcd46a10, 0x3e019d3c, 0x3d51ade6, 0xbea6892b, 0xbd9eb464, 0x3f7e719f, 0x3d9facdf,
    ],
    // 3: [0.078125, 0.09375)
    [
        0x3dc00000, 0xbd0045e0, 0x3dfd3665, 0x3d79b55d, 0xbea4bda1, 0xbdbdc447, 0x3f7dc35c, 0x3dbf7081,
    ],
    // 4: [0.09375, 0.109375)
    [
        0x3de00000, 0xbd157173, 0x3df63424, 0x3d905c30, 0xbea2a306, 0xbddc768f, 0x3f7cf636, 0x3ddf1c6c,
    ],
    // 5: [0.109375, 0.125)
    [
        0x3e000000, 0xbd2993f7, 0x3dee4023, 0x3da34819, 0xbea03b89, 0xbdfabc9b, 0x3f7c0a93, 0x3dfeacc9,
    ],
    // 6: [0.125, 0.15625)
    [
        0x3e200000, 0xbd458760, 0x3ddc0436, 0x3dc718bb, 0xbe9a9020, 0xbe1ae5e0, 0x3f79d9b0, 0x3e1eb5e4,
    ],
    // 7: [0.15625, 0.1875)
    [
        0x3e400000, 0xbd661c77, 0x3dc66674, 0x3de7c462, 0xbe93d27c, 0xbe374334, 0x3f7734f2, 0x3e3dc7fd,
    ],
    // 8: [0.1875, 0.21875)
    [
        0x3e600000, 0xbd8053c4, 0x3dae4a7f, 0x3e026f12, 0xbe8c1d7d, 0xbe524557, 0x3f742165, 0x3e5c7e82,
    ],
    // 9: [0.21875, 0.25)
    [
        0x3e800000, 0xbd8a570c, 0x3d944d3c, 0x3e0f0752, 0xbe838f20, 0xbe6bc0ac, 0x3f70a4d0, 0x3e7acbf5,
    ],
    // 10: [0.25, 0.3125)
    [
        0x3ea00000, 0xbd92f2d6, 0x3d3ac95a, 0x3e21ead5, 0xbe60d251, 0xbe8cc910, 0x3f688aba, 0x3e9afcc5,
    ],
    // 11: [0.3125, 0.375)
    [
        0x3ec00000, 0xbd9307d0, 0x3c977f8a, 0x3e2c247a, 0xbe36e285, 0xbe9feaa7, 0x3f5f1fde, 0x3eb77a9f,
    ],
    // 12: [0.375, 0.4375)
    [
        0x3ee00000, 0xbd87962b, 0xbbd48031, 0x3e2e0f70, 0xbe0b710a, 0xbeaf0785, 0x3f54a2dd, 0x3ed2b94f,
    ],
    // 13: [0.4375, 0.5)
    [
        0x3f000000, 0xbd66e501, 0xbce3265e, 0x3e289b2c, 0xbdc0ecfc, 0xbeba13a1, 0x3f4954a3, 0x3eec9a9f,
    ],
    // 14: [0.5, 0.625)
    [
        0x3f200000, 0xbd189ed4, 0xbd6b5106, 0x3e0d00a4, 0xbc922573, 0xbec49db3, 0x3f314262, 0x3f0dfa3f,
    ],
    // 15: [0.625, 0.75)
    [
        0x3f400000, 0xbc3e2e0c, 0xbd8701c1, 0x3dcbf52e, 0x3d2b38a1, 0xbec201ef, 0x3f18b9d9, 0x3f22991f,
    ],
    // 16: [0.75, 0.875)
    [
        0x3f600000, 0x3bed0465, 0xbd7594a0, 0x3d789c10, 0x3da78852, 0xbeb5d3e9, 0x3f012805, 0x3f343328,
    ],
    // 17: [0.875, 1)
    [
        0x3f800000, 0x3c8b1758, 0xbd3f40e0, 0x3ce2bb31, 0x3dd42dbd, 0xbea3c362, 0x3ed706e0, 0x3f42f7d6,
    ],
    // 18: [1, 1.25)
    [
        0x3fa00000, 0x3c976c75, 0xbc94e44d, 0xbc4b9001, 0x3dddd93d, 0xbe739466, 0x3e8f928a, 0x3f59291e,
    ],
    // 19: [1.25, 1.5)
    [
        0x3fc00000, 0x3c33bb36, 0xbaa8a12c, 0xbcca912e, 0x3db3e3ef, 0xbe277db2, 0x3e390b2a, 0x3f67b7cc,
    ],
    // 20: [1.5, 1.75)
    [
        0x3fe00000, 0x3b86d17a, 0x3b92d31f, 0xbcbf8a8a, 0x3d80e372, 0xbddb6be8, 0x3de91652, 0x3f70fdfd,
    ],
    // 21: [1.75, 2)
    [
        0x40000000, 0x3a29ccd6, 0x3ba6af24, 0xbc921e2b, 0x3d2c7f9f, 0xbd8b7cce, 0x3d90b162, 0x3f76ca83,
    ],
    // 22: [2, 2.5)
    [
        0x40200000, 0xba3cd620, 0x3b3dd003, 0xbc03840a, 0x3c8b78d3, 0xbcd6ec9a, 0x3cd9d7f8, 0x3f7c92c1,
    ],
    // 23: [2.5, 3)
    [
        0x40400000, 0xba0efc2e, 0x3a8fbd83, 0xbb52e229, 0x3bd417e9, 0xbc20db21, 0x3c21a514, 0x3f7ebbe9,
    ],
    // 24: [3, 3.5)
    [
        0x40600000, 0xb97f20d0, 0x39d49cfb, 0xbaa020b4, 0x3b1dedff, 0xbb6e3285, 0x3b6e99b9, 0x3f7f8896,
    ],
    // 25: [3.5, 4)
    [
        0x40800000, 0xb8c85713, 0x391c9b58, 0xb9ee6095, 0x3a696b31, 0xbaafa99a, 0x3aafc2af, 0x3f7fd40c,
    ],
    // 26: [4, 5)
    [
        0x40a00000, 0xb7bc3b19, 0x358466cc, 0xb8a29525, 0x38f0c5b1, 0xb93f7f87, 0x393e5562, 0x3f7ffa0d,
    ],
    // 27: [5, 6)
    [
        0x40c00000, 0xb64d54ff, 0x33d7f5a8, 0xb73098d0, 0x37824aa0, 0xb7cf6145, 0x37ce15fd, 0x3f7fff32,
    ],
    // 28: [6, 7)
    [
        0x40e00000, 0xb4de88f7, 0x325f6db7, 0xb5bf4842, 0x360d0ea3, 0xb66088a0, 0x365f20b5, 0x3f7fffe4,
    ],
    // 29: [7, 8)
    [
        0x41000000, 0xb370f7c2, 0x30f06137, 0xb44f1c37, 0x3498b814, 0xb4f31984, 0x34f193a9, 0x3f7ffffc,
    ],
    // 30: [8, 10)
    [
        0x41200000, 0xb152a7b5, 0xb2177f5a, 0xb29ca2ae, 0xb1d4c29d, 0xb2538589, 0x3204b73a, 0x3f800000,
    ],
    // 31: saturation
    [
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x3f800000,
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_row_is_the_odd_identity_expansion() {
        let row = TANH_TABLE_F64[0];
        assert_eq!(row[0], 0, "offset");
        assert_eq!(f64::from_bits(row[17]), 0.0, "c0");
        assert_eq!(f64::from_bits(row[16]), 1.0, "c1");
        for even in (2..=16).step_by(2) {
            assert_eq!(row[17 - even], 0, "c{even} must vanish");
        }

        let row = TANH_TABLE_F32[0];
        assert_eq!(row[0], 0);
        assert_eq!(f32::from_bits(row[7]), 0.0);
        assert_eq!(f32::from_bits(row[6]), 1.0);
        assert_eq!(row[5], 0);
    }

    #[test]
    fn last_row_is_the_saturation_sentinel() {
        let row = TANH_TABLE_F64[15];
        assert_eq!(f64::from_bits(row[17]), 1.0);
        assert!(row[..17].iter().all(|&bits| bits == 0));

        let row = TANH_TABLE_F32[31];
        assert_eq!(f32::from_bits(row[7]), 1.0);
        assert!(row[..7].iter().all(|&bits| bits == 0));
    }

    #[test]
    fn offsets_are_subinterval_upper_edges() {
        let offsets: Vec<f64> = TANH_TABLE_F64[1..15]
            .iter()
            .map(|row| f64::from_bits(row[0]))
            .collect();
        assert_eq!(offsets[0], 0.25);
        assert_eq!(offsets[13], 24.0);
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));

        let offsets: Vec<f32> = TANH_TABLE_F32[1..31]
            .iter()
            .map(|row| f32::from_bits(row[0]))
            .collect();
        assert_eq!(offsets[0], 0.0625);
        assert_eq!(offsets[29], 10.0);
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn constant_terms_track_tanh_at_the_offset() {
        for row in &TANH_TABLE_F64[1..15] {
            let offset = f64::from_bits(row[0]);
            let c0 = f64::from_bits(row[17]);
            assert!((c0 - offset.tanh()).abs() <= 2.0 * f64::EPSILON, "row at {offset}");
        }
        for row in &TANH_TABLE_F32[1..31] {
            let offset = f32::from_bits(row[0]);
            let c0 = f32::from_bits(row[7]);
            assert!(
                (c0 as f64 - (offset as f64).tanh()).abs() <= 2.0 * f32::EPSILON as f64,
                "row at {offset}"
            );
        }
    }
}
