//! Header titles and menu labels in Chinese.
//!
//! Switching language mutates the process-wide loader, so this lives in its
//! own test binary and runs as a single test.

use ui::routes::RouteRegistry;

#[test]
fn chinese_titles_and_labels() {
    ui::i18n::init();
    ui::i18n::set_language("zh-CN").expect("zh-CN bundle is embedded");

    let registry = RouteRegistry::builtin();
    let expected = [
        ("/", "首页", "交互式Matplotlib可视化演示"),
        ("/fixed-subplots", "固定区域子图", "5.1 绘制固定区域的子图"),
        ("/custom-subplots", "自定义区域子图", "5.2 绘制自定义区域的子图"),
        ("/shared-axes", "共享坐标轴", "5.3 共享子图的坐标轴"),
        ("/layout", "子图布局", "5.4 子图的布局"),
    ];
    for (path, label, title) in expected {
        let info = registry.lookup(path);
        assert_eq!(info.label, label, "label for {path}");
        assert_eq!(info.title, title, "title for {path}");
    }

    // Unknown paths fall back to the application title.
    assert_eq!(registry.title("/nope"), "交互式Matplotlib可视化演示");
    assert_eq!(ui::i18n::message("brand-overlay"), "Matplotlib Demo");
    assert!(ui::i18n::current_language().starts_with("zh"));
}
