//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

const RULE_WIDTH: usize = 60;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印失败文件列表，最多显示 `limit` 条
pub fn print_failures(failures: &[(String, String)], limit: usize) {
    if failures.is_empty() {
        return;
    }

    print_warning("Failed files:");
    for (path, err) in failures.iter().take(limit) {
        eprintln!("  {} {}", path.red(), err.dimmed());
    }
    if failures.len() > limit {
        print_warning(&format!("  ... and {} more", failures.len() - limit));
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(RULE_WIDTH);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}
