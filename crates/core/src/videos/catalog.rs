use super::types::{VideoCategory, VideoItem, VideoSearchEntry};

/// Path prefix, relative to the site base URL, under which video files are served.
pub const VIDEO_BASE_URL: &str = "/videos/";

fn video(id: &str, title: &str, file_name: &str, description: &str) -> VideoItem {
    VideoItem {
        id: id.to_string(),
        title: title.to_string(),
        file_name: file_name.to_string(),
        description: description.to_string(),
        icon: None,
    }
}

/// The built-in tutorial catalog.
pub fn default_catalog() -> Vec<VideoCategory> {
    vec![
        VideoCategory {
            name: "快速入门".to_string(),
            icon: "🚀".to_string(),
            videos: vec![
                video("start-1", "平台介绍", "intro.mp4", "了解平台的核心功能和使用场景"),
                video("start-2", "账号注册", "register.mp4", "演示如何注册和登录系统"),
            ],
        },
        VideoCategory {
            name: "基础操作".to_string(),
            icon: "📖".to_string(),
            videos: vec![
                video("basic-1", "数据导入", "import.mp4", "演示如何导入数据到系统"),
                video("basic-2", "数据导出", "export.mp4", "演示如何导出数据报表"),
            ],
        },
        VideoCategory {
            name: "高级功能".to_string(),
            icon: "⚙️".to_string(),
            videos: vec![
                video("adv-1", "API对接", "api.mp4", "演示如何使用API进行系统对接"),
                video("adv-2", "权限管理", "permission.mp4", "演示如何配置用户权限"),
            ],
        },
    ]
}

/// Public URL of a video for a site deployed under `base_url`.
pub fn video_url(base_url: &str, item: &VideoItem) -> String {
    let base = base_url.trim_end_matches('/');
    let prefix = VIDEO_BASE_URL.trim_matches('/');
    let file = item.file_name.trim_start_matches('/');
    format!("{base}/{prefix}/{file}")
}

/// One search record per video, in catalog order.
pub fn search_entries(categories: &[VideoCategory]) -> Vec<VideoSearchEntry> {
    categories
        .iter()
        .flat_map(|category| {
            category.videos.iter().map(move |video| VideoSearchEntry {
                kind: "video",
                tab: "main",
                category: category.name.clone(),
                title: video.title.clone(),
                description: video.description.clone(),
            })
        })
        .collect()
}

pub fn find_video<'a>(categories: &'a [VideoCategory], id: &str) -> Option<&'a VideoItem> {
    categories.iter().flat_map(|c| c.videos.iter()).find(|v| v.id == id)
}
