//! The static category table. Each entry maps a named category to the
//! concrete locations its application stores cache data in, plus the
//! risk and privilege metadata shown to the user before cleaning.

use super::{Category, CategoryKind, Group, LocationRule, RiskLevel};

fn files(
    id: &str,
    name: &str,
    description: &str,
    group: Group,
    risk: RiskLevel,
    requires_admin: bool,
    locations: Vec<LocationRule>,
) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        group,
        risk,
        requires_admin,
        kind: CategoryKind::Files,
        locations,
    }
}

/// Windows system locations
pub fn windows_categories() -> Vec<Category> {
    vec![
        files(
            "windows_temp",
            "Windows Temp Files",
            "Temporary files in the %TEMP% folder",
            Group::Windows,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree("%TEMP%")],
        ),
        files(
            "windows_system_temp",
            "System Temp Files",
            "Temporary files in %WINDIR%\\Temp",
            Group::Windows,
            RiskLevel::Safe,
            true,
            vec![LocationRule::tree("%WINDIR%\\Temp")],
        ),
        files(
            "prefetch",
            "Prefetch Files",
            "Application prefetch data (may slow first launch)",
            Group::Windows,
            RiskLevel::Low,
            true,
            vec![LocationRule::flat("%WINDIR%\\Prefetch", "*.pf")],
        ),
        files(
            "windows_update",
            "Windows Update Cache",
            "Downloaded Windows Update files",
            Group::Windows,
            RiskLevel::Low,
            true,
            vec![LocationRule::tree(
                "%WINDIR%\\SoftwareDistribution\\Download",
            )],
        ),
        files(
            "windows_installer",
            "Windows Installer Cache",
            "Windows Installer patch cache files",
            Group::Windows,
            RiskLevel::Medium,
            true,
            vec![LocationRule::tree("%WINDIR%\\Installer\\$PatchCache$")],
        ),
        files(
            "windows_logs",
            "Windows Log Files",
            "System and setup log files",
            Group::Windows,
            RiskLevel::Safe,
            true,
            vec![
                LocationRule::tree("%WINDIR%\\Logs"),
                LocationRule::tree("%WINDIR%\\Panther"),
                LocationRule::tree("%LOCALAPPDATA%\\CrashDumps"),
            ],
        ),
        files(
            "error_reports",
            "Error Reports",
            "Windows Error Reporting data",
            Group::Windows,
            RiskLevel::Safe,
            true,
            vec![
                LocationRule::tree("%PROGRAMDATA%\\Microsoft\\Windows\\WER"),
                LocationRule::tree("%LOCALAPPDATA%\\Microsoft\\Windows\\WER"),
            ],
        ),
        files(
            "delivery_optimization",
            "Delivery Optimization",
            "Windows Update delivery optimization cache",
            Group::Windows,
            RiskLevel::Safe,
            true,
            vec![LocationRule::tree(
                "%WINDIR%\\ServiceProfiles\\NetworkService\\AppData\\Local\\Microsoft\\Windows\\DeliveryOptimization\\Cache",
            )],
        ),
        files(
            "thumbnail_cache",
            "Thumbnail Cache",
            "Explorer thumbnail cache files",
            Group::Windows,
            RiskLevel::Safe,
            false,
            vec![LocationRule::flat(
                "%LOCALAPPDATA%\\Microsoft\\Windows\\Explorer",
                "thumbcache_*.db",
            )],
        ),
        files(
            "icon_cache",
            "Icon Cache",
            "Windows icon cache files",
            Group::Windows,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::flat("%LOCALAPPDATA%", "IconCache.db"),
                LocationRule::flat(
                    "%LOCALAPPDATA%\\Microsoft\\Windows\\Explorer",
                    "iconcache_*.db",
                ),
            ],
        ),
        files(
            "font_cache",
            "Font Cache",
            "Windows font cache files",
            Group::Windows,
            RiskLevel::Low,
            true,
            vec![LocationRule::tree(
                "%WINDIR%\\ServiceProfiles\\LocalService\\AppData\\Local\\FontCache",
            )],
        ),
        Category {
            id: "recycle_bin".into(),
            name: "Recycle Bin".into(),
            description: "Empty the Recycle Bin".into(),
            group: Group::Windows,
            risk: RiskLevel::Medium,
            requires_admin: false,
            kind: CategoryKind::EmptyRecycleBin,
            locations: Vec::new(),
        },
    ]
}

/// Browser caches and privacy-sensitive data
pub fn browser_categories() -> Vec<Category> {
    vec![
        files(
            "chrome_cache",
            "Chrome Cache",
            "Google Chrome browser cache",
            Group::Browsers,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Cache"),
                LocationRule::tree(
                    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Code Cache",
                ),
                LocationRule::tree("%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\GPUCache"),
                LocationRule::tree("%LOCALAPPDATA%\\Google\\Chrome\\User Data\\ShaderCache"),
            ],
        ),
        files(
            "chrome_cookies",
            "Chrome Cookies",
            "Chrome cookies (will log out of websites)",
            Group::Browsers,
            RiskLevel::Medium,
            false,
            vec![
                LocationRule::flat(
                    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Network",
                    "Cookies*",
                ),
            ],
        ),
        files(
            "chrome_history",
            "Chrome History",
            "Browsing history",
            Group::Browsers,
            RiskLevel::Low,
            false,
            vec![
                LocationRule::flat(
                    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default",
                    "History*",
                ),
                LocationRule::flat(
                    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default",
                    "Visited Links",
                ),
            ],
        ),
        files(
            "chrome_downloads",
            "Chrome Download History",
            "Download history (not the downloaded files)",
            Group::Browsers,
            RiskLevel::Low,
            false,
            vec![LocationRule::flat(
                "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default",
                "Download Metadata",
            )],
        ),
        files(
            "chrome_session",
            "Chrome Session Data",
            "Session and tab data",
            Group::Browsers,
            RiskLevel::Medium,
            false,
            vec![
                LocationRule::tree("%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Sessions"),
                LocationRule::tree(
                    "%LOCALAPPDATA%\\Google\\Chrome\\User Data\\Default\\Session Storage",
                ),
            ],
        ),
        files(
            "firefox_cache",
            "Firefox Cache",
            "Mozilla Firefox browser cache",
            Group::Browsers,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree(
                "%LOCALAPPDATA%\\Mozilla\\Firefox\\Profiles\\*\\cache2",
            )],
        ),
        files(
            "firefox_cookies",
            "Firefox Cookies",
            "Firefox cookies (will log out of websites)",
            Group::Browsers,
            RiskLevel::Medium,
            false,
            vec![LocationRule::flat(
                "%APPDATA%\\Mozilla\\Firefox\\Profiles\\*",
                "cookies.sqlite*",
            )],
        ),
        files(
            "firefox_history",
            "Firefox History",
            "Browsing history",
            Group::Browsers,
            RiskLevel::Low,
            false,
            vec![LocationRule::flat(
                "%APPDATA%\\Mozilla\\Firefox\\Profiles\\*",
                "places.sqlite*",
            )],
        ),
        files(
            "firefox_session",
            "Firefox Session",
            "Session and tab data",
            Group::Browsers,
            RiskLevel::Medium,
            false,
            vec![LocationRule::tree(
                "%APPDATA%\\Mozilla\\Firefox\\Profiles\\*\\sessionstore-backups",
            )],
        ),
        files(
            "edge_cache",
            "Edge Cache",
            "Microsoft Edge browser cache",
            Group::Browsers,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default\\Cache"),
                LocationRule::tree(
                    "%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default\\Code Cache",
                ),
                LocationRule::tree("%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default\\GPUCache"),
                LocationRule::tree("%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\ShaderCache"),
            ],
        ),
        files(
            "edge_cookies",
            "Edge Cookies",
            "Edge cookies (will log out of websites)",
            Group::Browsers,
            RiskLevel::Medium,
            false,
            vec![LocationRule::flat(
                "%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default\\Network",
                "Cookies*",
            )],
        ),
        files(
            "edge_history",
            "Edge History",
            "Browsing history",
            Group::Browsers,
            RiskLevel::Low,
            false,
            vec![LocationRule::flat(
                "%LOCALAPPDATA%\\Microsoft\\Edge\\User Data\\Default",
                "History*",
            )],
        ),
        files(
            "brave_cache",
            "Brave Cache",
            "Brave browser cache",
            Group::Browsers,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree(
                "%LOCALAPPDATA%\\BraveSoftware\\Brave-Browser\\User Data\\Default\\Cache",
            )],
        ),
        files(
            "opera_cache",
            "Opera Cache",
            "Opera browser cache",
            Group::Browsers,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree(
                "%LOCALAPPDATA%\\Opera Software\\Opera Stable\\Cache",
            )],
        ),
    ]
}

/// Desktop application caches
pub fn application_categories() -> Vec<Category> {
    vec![
        files(
            "spotify_cache",
            "Spotify Cache",
            "Spotify streaming cache",
            Group::Applications,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%LOCALAPPDATA%\\Spotify\\Storage"),
                LocationRule::tree("%LOCALAPPDATA%\\Spotify\\Data"),
            ],
        ),
        files(
            "discord_cache",
            "Discord Cache",
            "Discord cache files",
            Group::Applications,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%APPDATA%\\discord\\Cache"),
                LocationRule::tree("%APPDATA%\\discord\\Code Cache"),
                LocationRule::tree("%APPDATA%\\discord\\GPUCache"),
            ],
        ),
        files(
            "teams_cache",
            "Teams Cache",
            "Microsoft Teams cache",
            Group::Applications,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%APPDATA%\\Microsoft\\Teams\\Cache"),
                LocationRule::tree("%APPDATA%\\Microsoft\\Teams\\blob_storage"),
                LocationRule::tree("%APPDATA%\\Microsoft\\Teams\\GPUCache"),
                LocationRule::tree("%APPDATA%\\Microsoft\\Teams\\tmp"),
            ],
        ),
        files(
            "slack_cache",
            "Slack Cache",
            "Slack cache files",
            Group::Applications,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%APPDATA%\\Slack\\Cache"),
                LocationRule::tree("%APPDATA%\\Slack\\Code Cache"),
                LocationRule::tree("%APPDATA%\\Slack\\GPUCache"),
            ],
        ),
        files(
            "steam_cache",
            "Steam Cache",
            "Steam download cache",
            Group::Applications,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("C:\\Program Files (x86)\\Steam\\appcache"),
                LocationRule::tree("C:\\Program Files (x86)\\Steam\\depotcache"),
            ],
        ),
        files(
            "adobe_cache",
            "Adobe Cache",
            "Adobe Reader and Acrobat cache",
            Group::Applications,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree("%LOCALAPPDATA%\\Adobe\\Acrobat\\DC\\Cache")],
        ),
    ]
}

/// Developer tool caches
pub fn development_categories() -> Vec<Category> {
    vec![
        files(
            "vscode_cache",
            "VS Code Cache",
            "Visual Studio Code cache",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%APPDATA%\\Code\\Cache"),
                LocationRule::tree("%APPDATA%\\Code\\CachedData"),
                LocationRule::tree("%APPDATA%\\Code\\Code Cache"),
                LocationRule::tree("%APPDATA%\\Code\\GPUCache"),
            ],
        ),
        files(
            "jetbrains_cache",
            "JetBrains Cache",
            "JetBrains IDE caches",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree("%LOCALAPPDATA%\\JetBrains\\*\\caches")],
        ),
        files(
            "npm_cache",
            "npm Cache",
            "Node.js npm package cache",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![
                LocationRule::tree("%APPDATA%\\npm-cache"),
                LocationRule::tree("%LOCALAPPDATA%\\npm-cache"),
            ],
        ),
        files(
            "pip_cache",
            "pip Cache",
            "Python pip package cache",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree("%LOCALAPPDATA%\\pip\\Cache")],
        ),
        files(
            "nuget_cache",
            "NuGet Cache",
            ".NET NuGet package cache",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree("%USERPROFILE%\\.nuget\\packages")],
        ),
        files(
            "maven_cache",
            "Maven Repository",
            "Maven dependency cache (may include local artifacts)",
            Group::Development,
            RiskLevel::Medium,
            false,
            vec![LocationRule::tree("%USERPROFILE%\\.m2\\repository")],
        ),
        files(
            "gradle_cache",
            "Gradle Cache",
            "Gradle build cache",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree("%USERPROFILE%\\.gradle\\caches")],
        ),
        files(
            "visual_studio_cache",
            "Visual Studio Cache",
            "Visual Studio component model cache",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree(
                "%LOCALAPPDATA%\\Microsoft\\VisualStudio\\*\\ComponentModelCache",
            )],
        ),
        files(
            "symbol_cache",
            "Symbol Cache",
            "Debugger symbol cache",
            Group::Development,
            RiskLevel::Safe,
            false,
            vec![LocationRule::tree("%LOCALAPPDATA%\\Temp\\SymbolCache")],
        ),
    ]
}

/// System-wide lists and caches
pub fn system_categories() -> Vec<Category> {
    vec![
        files(
            "recent_documents",
            "Recent Documents",
            "Recent documents list",
            Group::System,
            RiskLevel::Low,
            false,
            vec![LocationRule::flat(
                "%APPDATA%\\Microsoft\\Windows\\Recent",
                "*.lnk",
            )],
        ),
        Category {
            id: "dns_cache".into(),
            name: "DNS Cache".into(),
            description: "Flush the DNS resolver cache".into(),
            group: Group::System,
            risk: RiskLevel::Safe,
            requires_admin: true,
            kind: CategoryKind::FlushDns,
            locations: Vec::new(),
        },
    ]
}

/// The full builtin registry
pub fn builtin_categories() -> Vec<Category> {
    let mut cats = Vec::new();
    cats.extend(windows_categories());
    cats.extend(browser_categories());
    cats.extend(application_categories());
    cats.extend(development_categories());
    cats.extend(system_categories());
    cats
}
