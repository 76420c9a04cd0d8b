//! Tabulated Standing-Katz z-factor chart with bilinear interpolation.
//!
//! Static reference data: z on a grid of reduced temperature bands (rows)
//! and reduced pressure bands (columns, 0 to 15 in steps of 0.5).

const TPR: [f64; 16] = [
    1.05, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9, 2.0, 2.2, 2.4, 2.6, 2.8, 3.0,
];

const PPR_STEP: f64 = 0.5;
const PPR_MAX: f64 = 15.0;

#[rustfmt::skip]
const Z: [[f64; 31]; 16] = [
    // Tpr = 1.05
    [
        1.0000, 0.8301, 0.5867, 0.2837, 0.3284, 0.3868, 0.4466, 0.5063,
        0.5654, 0.6240, 0.6819, 0.7392, 0.7960, 0.8522, 0.9079, 0.9631,
        1.0179, 1.0723, 1.1263, 1.1799, 1.2331, 1.2861, 1.3386, 1.3909,
        1.4429, 1.4946, 1.5460, 1.5972, 1.6481, 1.6988, 1.7492,
    ],
    // Tpr = 1.1
    [
        1.0000, 0.8570, 0.6774, 0.4464, 0.3763, 0.4125, 0.4635, 0.5178,
        0.5730, 0.6282, 0.6832, 0.7378, 0.7921, 0.8459, 0.8993, 0.9523,
        1.0049, 1.0571, 1.1089, 1.1604, 1.2116, 1.2625, 1.3130, 1.3632,
        1.4132, 1.4629, 1.5124, 1.5615, 1.6105, 1.6592, 1.7077,
    ],
    // Tpr = 1.2
    [
        1.0000, 0.8951, 0.7784, 0.6532, 0.5527, 0.5181, 0.5302, 0.5632,
        0.6047, 0.6501, 0.6973, 0.7453, 0.7937, 0.8422, 0.8906, 0.9389,
        0.9870, 1.0349, 1.0825, 1.1299, 1.1771, 1.2240, 1.2707, 1.3171,
        1.3633, 1.4092, 1.4550, 1.5005, 1.5458, 1.5909, 1.6358,
    ],
    // Tpr = 1.3
    [
        1.0000, 0.9203, 0.8372, 0.7544, 0.6826, 0.6378, 0.6243, 0.6339,
        0.6578, 0.6898, 0.7267, 0.7663, 0.8076, 0.8500, 0.8929, 0.9361,
        0.9795, 1.0229, 1.0664, 1.1097, 1.1530, 1.1961, 1.2391, 1.2819,
        1.3246, 1.3670, 1.4094, 1.4515, 1.4935, 1.5353, 1.5769,
    ],
    // Tpr = 1.4
    [
        1.0000, 0.9380, 0.8760, 0.8168, 0.7654, 0.7283, 0.7094, 0.7077,
        0.7191, 0.7396, 0.7665, 0.7975, 0.8314, 0.8672, 0.9043, 0.9423,
        0.9808, 1.0198, 1.0590, 1.0984, 1.1378, 1.1773, 1.2167, 1.2561,
        1.2954, 1.3347, 1.3738, 1.4128, 1.4517, 1.4905, 1.5292,
    ],
    // Tpr = 1.5
    [
        1.0000, 0.9509, 0.9034, 0.8593, 0.8215, 0.7930, 0.7761, 0.7711,
        0.7763, 0.7896, 0.8091, 0.8332, 0.8606, 0.8904, 0.9221, 0.9550,
        0.9889, 1.0236, 1.0587, 1.0942, 1.1300, 1.1660, 1.2021, 1.2382,
        1.2744, 1.3106, 1.3467, 1.3828, 1.4189, 1.4549, 1.4908,
    ],
    // Tpr = 1.6
    [
        1.0000, 0.9607, 0.9235, 0.8899, 0.8616, 0.8401, 0.8268, 0.8219,
        0.8248, 0.8343, 0.8492, 0.8684, 0.8909, 0.9160, 0.9430, 0.9716,
        1.0014, 1.0321, 1.0635, 1.0955, 1.1278, 1.1605, 1.1935, 1.2266,
        1.2599, 1.2932, 1.3266, 1.3600, 1.3934, 1.4268, 1.4602,
    ],
    // Tpr = 1.7
    [
        1.0000, 0.9681, 0.9388, 0.9128, 0.8914, 0.8754, 0.8655, 0.8620,
        0.8644, 0.8721, 0.8844, 0.9004, 0.9195, 0.9410, 0.9644, 0.9895,
        1.0158, 1.0432, 1.0714, 1.1002, 1.1295, 1.1593, 1.1894, 1.2198,
        1.2504, 1.2811, 1.3119, 1.3429, 1.3739, 1.4049, 1.4360,
    ],
    // Tpr = 1.8
    [
        1.0000, 0.9740, 0.9506, 0.9304, 0.9141, 0.9023, 0.8954, 0.8935,
        0.8963, 0.9033, 0.9142, 0.9282, 0.9449, 0.9639, 0.9847, 1.0070,
        1.0306, 1.0552, 1.0807, 1.1069, 1.1336, 1.1608, 1.1884, 1.2164,
        1.2445, 1.2729, 1.3015, 1.3302, 1.3590, 1.3879, 1.4169,
    ],
    // Tpr = 1.9
    [
        1.0000, 0.9787, 0.9599, 0.9441, 0.9318, 0.9234, 0.9189, 0.9185,
        0.9219, 0.9289, 0.9390, 0.9518, 0.9670, 0.9841, 1.0030, 1.0232,
        1.0447, 1.0671, 1.0904, 1.1143, 1.1389, 1.1639, 1.1894, 1.2152,
        1.2413, 1.2676, 1.2941, 1.3209, 1.3477, 1.3747, 1.4017,
    ],
    // Tpr = 2.0
    [
        1.0000, 0.9825, 0.9674, 0.9551, 0.9459, 0.9401, 0.9376, 0.9385,
        0.9426, 0.9497, 0.9595, 0.9715, 0.9857, 1.0016, 1.0189, 1.0376,
        1.0574, 1.0781, 1.0996, 1.1217, 1.1444, 1.1677, 1.1913, 1.2153,
        1.2396, 1.2641, 1.2889, 1.3139, 1.3390, 1.3642, 1.3896,
    ],
    // Tpr = 2.2
    [
        1.0000, 0.9881, 0.9785, 0.9712, 0.9665, 0.9644, 0.9649, 0.9679,
        0.9732, 0.9808, 0.9903, 1.0016, 1.0145, 1.0288, 1.0443, 1.0608,
        1.0782, 1.0964, 1.1153, 1.1348, 1.1547, 1.1752, 1.1960, 1.2171,
        1.2386, 1.2602, 1.2822, 1.3043, 1.3265, 1.3489, 1.3715,
    ],
    // Tpr = 2.4
    [
        1.0000, 0.9921, 0.9861, 0.9822, 0.9804, 0.9808, 0.9832, 0.9876,
        0.9939, 1.0019, 1.0114, 1.0224, 1.0346, 1.0479, 1.0621, 1.0773,
        1.0932, 1.1097, 1.1268, 1.1444, 1.1625, 1.1810, 1.1997, 1.2188,
        1.2382, 1.2577, 1.2775, 1.2975, 1.3176, 1.3378, 1.3581,
    ],
    // Tpr = 2.6
    [
        1.0000, 0.9949, 0.9915, 0.9899, 0.9902, 0.9922, 0.9959, 1.0013,
        1.0081, 1.0164, 1.0259, 1.0366, 1.0484, 1.0610, 1.0745, 1.0886,
        1.1034, 1.1188, 1.1346, 1.1509, 1.1675, 1.1845, 1.2018, 1.2193,
        1.2371, 1.2551, 1.2732, 1.2915, 1.3100, 1.3285, 1.3472,
    ],
    // Tpr = 2.8
    [
        1.0000, 0.9969, 0.9954, 0.9955, 0.9971, 1.0003, 1.0049, 1.0108,
        1.0181, 1.0265, 1.0360, 1.0465, 1.0578, 1.0700, 1.0828, 1.0962,
        1.1101, 1.1246, 1.1394, 1.1547, 1.1702, 1.1861, 1.2022, 1.2185,
        1.2350, 1.2517, 1.2686, 1.2856, 1.3027, 1.3200, 1.3373,
    ],
    // Tpr = 3.0
    [
        1.0000, 0.9984, 0.9983, 0.9996, 1.0022, 1.0061, 1.0113, 1.0177,
        1.0252, 1.0336, 1.0430, 1.0533, 1.0643, 1.0759, 1.0882, 1.1010,
        1.1142, 1.1279, 1.1420, 1.1564, 1.1710, 1.1860, 1.2011, 1.2165,
        1.2320, 1.2477, 1.2635, 1.2795, 1.2955, 1.3117, 1.3279,
    ],
];

/// Bilinear interpolation; `None` outside the tabulated range.
pub fn interpolate(ppr: f64, tpr: f64) -> Option<f64> {
    if !(0.0..=PPR_MAX).contains(&ppr) || !(TPR[0]..=TPR[TPR.len() - 1]).contains(&tpr) {
        return None;
    }

    let row = TPR.windows(2).position(|w| tpr <= w[1])?;
    let (t0, t1) = (TPR[row], TPR[row + 1]);
    let wt = (tpr - t0) / (t1 - t0);

    let col = ((ppr / PPR_STEP).floor() as usize).min(Z[0].len() - 2);
    let p0 = col as f64 * PPR_STEP;
    let wp = (ppr - p0) / PPR_STEP;

    let lower = Z[row][col] + wp * (Z[row][col + 1] - Z[row][col]);
    let upper = Z[row + 1][col] + wp * (Z[row + 1][col + 1] - Z[row + 1][col]);
    Some(lower + wt * (upper - lower))
}
