//! 测试用 JSON 样例

/// 内部格式：金刚石 Si，3 个 q 点，2 条能带
pub const INTERNAL_SI: &str = r#"{
    "name": "Si2",
    "formula": "Si2",
    "natoms": 2,
    "atom_types": ["Si", "Si"],
    "atom_numbers": [14, 14],
    "atomic_numbers": [14],
    "atom_pos_car": [[0.0, 0.0, 0.0], [1.3575, 1.3575, 1.3575]],
    "atom_pos_red": [[0.0, 0.0, 0.0], [0.25, 0.25, 0.25]],
    "lattice": [[0.0, 2.715, 2.715], [2.715, 0.0, 2.715], [2.715, 2.715, 0.0]],
    "qpoints": [[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.2, 0.0, 0.0]],
    "distances": [0.0, 0.1, 0.2],
    "eigenvalues": [[0.0, 500.0], [10.0, 498.0], [20.0, 495.0]],
    "vectors": [
        [[[[1,0],[0,0],[0,0]], [[1,0],[0,0],[0,0]]], [[[0,0],[1,0],[0,0]], [[0,0],[-1,0],[0,0]]]],
        [[[[1,0],[0,0],[0,0]], [[1,0],[0,0],[0,0]]], [[[0,0],[1,0],[0,0]], [[0,0],[-1,0],[0,0]]]],
        [[[[1,0],[0,0],[0,0]], [[1,0],[0,0],[0,0]]], [[[0,0],[1,0],[0,0]], [[0,0],[-1,0],[0,0]]]]
    ],
    "repetitions": [2, 2, 2],
    "highsym_qpts": [[0, "Γ"], [2, "X"]]
}"#;

/// pymatgen 格式：单位立方晶格中的 OH2（仅用于测试标签与形状），
/// 路径 Γ-X | U-M，共 6 个 q 点，2 条能带。
///
/// 倒格子为单位矩阵，笛卡尔 q 点等于约化 q 点。
pub const PYMATGEN_CUBIC: &str = r#"{
    "@module": "pymatgen.phonon.bandstructure",
    "@class": "PhononBandStructureSymmLine",
    "structure": {
        "@class": "Structure",
        "lattice": {
            "matrix": [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            "pbc": [true, true, true]
        },
        "sites": [
            {"label": "O", "xyz": [0.0, 0.0, 0.0], "abc": [0.0, 0.0, 0.0], "species": [{"element": "O", "occu": 1}]},
            {"label": "H", "xyz": [0.5, 0.0, 0.0], "abc": [0.5, 0.0, 0.0], "species": [{"element": "H", "occu": 1}]},
            {"label": "H", "xyz": [0.0, 0.5, 0.0], "abc": [0.0, 0.5, 0.0], "species": [{"element": "H", "occu": 1}]}
        ]
    },
    "qpoints": [
        [0.0, 0.0, 0.0], [0.5, 0.0, 0.0], [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0], [0.5, 1.0, 0.0], [1.0, 1.0, 0.0]
    ],
    "labels_dict": {
        "\\Gamma": [0.0, 0.0, 0.0],
        "X": [1.0, 0.0, 0.0],
        "U": [0.0, 1.0, 0.0],
        "M": [1.0, 1.0, 0.0]
    },
    "bands": [
        [0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        [10.0, 11.0, 12.0, 13.0, 14.0, 15.0]
    ],
    "eigendisplacements": {
        "real": [
            [
                [[0.1, 0.0, 0.0], [0.0, 0.2, 0.0], [0.0, 0.0, 0.3]],
                [[0.1, 0.0, 0.0], [0.0, 0.2, 0.0], [0.0, 0.0, 0.3]],
                [[0.1, 0.0, 0.0], [0.0, 0.2, 0.0], [0.0, 0.0, 0.3]],
                [[0.1, 0.0, 0.0], [0.0, 0.2, 0.0], [0.0, 0.0, 0.3]],
                [[0.1, 0.0, 0.0], [0.0, 0.2, 0.0], [0.0, 0.0, 0.3]],
                [[0.1, 0.0, 0.0], [0.0, 0.2, 0.0], [0.0, 0.0, 0.3]]
            ],
            [
                [[0.0, 0.0, 0.5], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.5], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.5], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.5], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.5], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.5], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]
            ]
        ],
        "imag": [
            [
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]
            ],
            [
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
                [[0.0, 0.1, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]
            ]
        ]
    },
    "has_nac": false
}"#;
