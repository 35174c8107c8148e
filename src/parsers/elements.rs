//! # 元素周期表
//!
//! 元素符号到原子序数的静态查找表。以显式常量表的形式传入外部格式
//! 解析器，而不是作为全局状态隐式使用。
//!
//! ## 依赖关系
//! - 被 `parsers/pymatgen.rs` 使用
//! - 使用 `regex` 从位点标签（如 "Fe1"）中提取元素符号

use regex::Regex;
use std::sync::LazyLock;

/// 位点标签开头的元素符号，其后不能紧跟字母
static SYMBOL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]?)(?:[^A-Za-z]|$)").expect("valid element symbol pattern")
});

/// 元素符号 -> 原子序数
#[derive(Debug, Clone, Copy)]
pub struct ElementTable {
    entries: &'static [(&'static str, u32)],
}

impl ElementTable {
    pub const fn new(entries: &'static [(&'static str, u32)]) -> Self {
        ElementTable { entries }
    }

    /// 按元素符号精确查找
    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, z)| *z)
    }

    /// 查找位点标签对应的原子序数
    ///
    /// 先精确匹配，再取标签开头的元素符号，后面只能跟非字母字符
    /// （"Fe1" -> "Fe", "O2-" -> "O"）。"Wyckoff"、"Va" 这类标签不是元素，返回 None。
    pub fn atomic_number(&self, label: &str) -> Option<u32> {
        let label = label.trim();
        if let Some(z) = self.get(label) {
            return Some(z);
        }

        let symbol = SYMBOL_PREFIX.captures(label)?.get(1)?.as_str();
        self.get(symbol)
    }

    /// 表中元素数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// IUPAC 周期表（1-118）
pub const PERIODIC_TABLE: ElementTable = ElementTable::new(&[
    ("H", 1), ("He", 2), ("Li", 3), ("Be", 4), ("B", 5), ("C", 6), ("N", 7), ("O", 8),
    ("F", 9), ("Ne", 10), ("Na", 11), ("Mg", 12), ("Al", 13), ("Si", 14), ("P", 15), ("S", 16),
    ("Cl", 17), ("Ar", 18), ("K", 19), ("Ca", 20), ("Sc", 21), ("Ti", 22), ("V", 23),
    ("Cr", 24), ("Mn", 25), ("Fe", 26), ("Co", 27), ("Ni", 28), ("Cu", 29), ("Zn", 30),
    ("Ga", 31), ("Ge", 32), ("As", 33), ("Se", 34), ("Br", 35), ("Kr", 36), ("Rb", 37),
    ("Sr", 38), ("Y", 39), ("Zr", 40), ("Nb", 41), ("Mo", 42), ("Tc", 43), ("Ru", 44),
    ("Rh", 45), ("Pd", 46), ("Ag", 47), ("Cd", 48), ("In", 49), ("Sn", 50), ("Sb", 51),
    ("Te", 52), ("I", 53), ("Xe", 54), ("Cs", 55), ("Ba", 56), ("La", 57), ("Ce", 58),
    ("Pr", 59), ("Nd", 60), ("Pm", 61), ("Sm", 62), ("Eu", 63), ("Gd", 64), ("Tb", 65),
    ("Dy", 66), ("Ho", 67), ("Er", 68), ("Tm", 69), ("Yb", 70), ("Lu", 71), ("Hf", 72),
    ("Ta", 73), ("W", 74), ("Re", 75), ("Os", 76), ("Ir", 77), ("Pt", 78), ("Au", 79),
    ("Hg", 80), ("Tl", 81), ("Pb", 82), ("Bi", 83), ("Po", 84), ("At", 85), ("Rn", 86),
    ("Fr", 87), ("Ra", 88), ("Ac", 89), ("Th", 90), ("Pa", 91), ("U", 92), ("Np", 93),
    ("Pu", 94), ("Am", 95), ("Cm", 96), ("Bk", 97), ("Cf", 98), ("Es", 99), ("Fm", 100),
    ("Md", 101), ("No", 102), ("Lr", 103), ("Rf", 104), ("Db", 105), ("Sg", 106), ("Bh", 107),
    ("Hs", 108), ("Mt", 109), ("Ds", 110), ("Rg", 111), ("Cn", 112), ("Nh", 113), ("Fl", 114),
    ("Mc", 115), ("Lv", 116), ("Ts", 117), ("Og", 118),
]);
