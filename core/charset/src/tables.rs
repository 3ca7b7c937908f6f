//! Static character data.
//!
//! Code points are kept as literals where they are unambiguous. CJK compatibility
//! ideographs and astral characters are written as escapes, since editors and
//! NFC-normalizing tools silently fold them into their unified counterparts.

use std::ops::RangeInclusive;

/// 全角スペース・全角英数字
pub const FULL_PITCH_RANGES: &[RangeInclusive<char>] = &[
    '\u{3000}'..='\u{3000}',
    '０'..='９',
    'Ａ'..='Ｚ',
    'ａ'..='ｚ',
];

/// 半角カタカナ (ｧ-ﾝ, ｰ, ﾞ, ﾟ)。ｦ と ･ は含まない
pub const HALF_WIDTH_KATAKANA_RANGES: &[RangeInclusive<char>] = &[
    'ｧ'..='ﾟ',
];

/// Unicode 依存文字。半角カナはここに加えて判定される
pub const UNICODE_DEPENDENT_RANGES: &[RangeInclusive<char>] = &[
    '⅓'..='↟',
    '①'..='⓯',
    '☀'..='♯',
    '㈠'..='㉃',
    '㊀'..='㏾',
    '＇'..='＇',
    '＂'..='＂',
    '№'..='№',
    '℡'..='℡',
];

/// 他ベンダー環境で表示できない機種依存文字
pub const INCOMPATIBLE_CHARS: &[char] = &[
    '纊', '褜', '鍈', '銈', '蓜', '俉', '炻', '昱', '棈', '鋹', '曻', '彅',
    '丨', '仡', '仼', '伀', '伃', '伹', '佖', '侒', '侊', '侚', '侔', '俍',
    '偀', '倢', '俿', '倞', '偆', '偰', '偂', '傔', '僴', '僘', '兊', '兤',
    '冝', '冾', '凬', '刕', '劜', '劦', '勀', '勛', '匀', '匇', '匤', '卲',
    '厓', '厲', '叝', '\u{FA0E}', '咜', '咊', '咩', '哿', '喆', '坙', '坥', '垬',
    '埈', '埇', '\u{FA0F}', '\u{FA10}', '增', '墲', '夋', '奓', '奛', '奝', '奣', '妤',
    '妺', '孖', '寀', '甯', '寘', '寬', '尞', '岦', '岺', '峵', '崧', '嵓',
    '\u{FA11}', '嵂', '嵭', '嶸', '嶹', '巐', '弡', '弴', '彧', '德', '忞', '恝',
    '悅', '悊', '惞', '惕', '愠', '惲', '愑', '愷', '愰', '憘', '戓', '抦',
    '揵', '摠', '撝', '擎', '敎', '昀', '昕', '昻', '昉', '昮', '昞', '昤',
    '晥', '晗', '晙', '\u{FA12}', '晳', '暙', '暠', '暲', '暿', '曺', '朎', '\u{F929}',
    '杦', '枻', '桒', '柀', '栁', '桄', '棏', '\u{FA13}', '楨', '\u{FA14}', '榘', '槢',
    '樰', '橫', '橆', '橳', '橾', '櫢', '櫤', '毖', '氿', '汜', '沆', '汯',
    '泚', '洄', '涇', '浯', '涖', '涬', '淏', '淸', '淲', '淼', '渹', '湜',
    '渧', '渼', '溿', '澈', '澵', '濵', '瀅', '瀇', '瀨', '炅', '炫', '焏',
    '焄', '煜', '煆', '煇', '\u{FA15}', '燁', '燾', '犱', '犾', '猤', '\u{FA16}', '獷',
    '玽', '珉', '珖', '珣', '珒', '琇', '珵', '琦', '琪', '琩', '琮', '瑢',
    '璉', '璟', '甁', '畯', '皂', '皜', '皞', '皛', '皦', '\u{FA17}', '睆', '劯',
    '砡', '硎', '硤', '硺', '礰', '\u{FA18}', '\u{FA19}', '\u{FA1A}', '禔', '\u{FA1B}', '禛', '竑',
    '竧', '\u{FA1C}', '竫', '箞', '\u{FA1D}', '絈', '絜', '綷', '綠', '緖', '繒', '罇',
    '羡', '\u{FA1E}', '茁', '荢', '荿', '菇', '菶', '葈', '蒴', '蕓', '蕙', '蕫',
    '\u{FA1F}', '薰', '\u{FA20}', '\u{FA21}', '蠇', '裵', '訒', '訷', '詹', '誧', '誾', '諟',
    '\u{FA22}', '諶', '譓', '譿', '賰', '賴', '贒', '赶', '\u{FA23}', '軏', '\u{FA24}', '\u{FA25}',
    '遧', '郞', '\u{FA26}', '鄕', '鄧', '釚', '釗', '釞', '釭', '釮', '釤', '釥',
    '鈆', '鈐', '鈊', '鈺', '鉀', '鈼', '鉎', '鉙', '鉑', '鈹', '鉧', '銧',
    '鉷', '鉸', '鋧', '鋗', '鋙', '鋐', '\u{FA27}', '鋕', '鋠', '鋓', '錥', '錡',
    '鋻', '\u{FA28}', '錞', '鋿', '錝', '錂', '鍰', '鍗', '鎤', '鏆', '鏞', '鏸',
    '鐱', '鑅', '鑈', '閒', '\u{F9DC}', '\u{FA29}', '隝', '隯', '霳', '霻', '靃', '靍',
    '靏', '靑', '靕', '顗', '顥', '\u{FA2A}', '\u{FA2B}', '餧', '\u{FA2C}', '馞', '驎', '髙',
    '髜', '魵', '魲', '鮏', '鮱', '鮻', '鰀', '鵰', '鵫', '\u{FA2D}', '鸙', '黑',
];

/// 機種依存文字 → 安全な文字の置換表。キーの集合が機種依存文字クラスになる
pub const SAFE_STRING_TABLE: &[(char, &str)] = &[
    ('➀', "(1)"), ('➁', "(2)"), ('➂', "(3)"), ('➃', "(4)"), ('➄', "(5)"),
    ('➅', "(6)"), ('➆', "(7)"), ('➇', "(8)"), ('➈', "(9)"), ('➉', "(10)"),
    ('～', "〜"), ('－', "−"), ('∥', "‖"), ('￠', "¢"), ('￡', "£"),
    ('￢', "¬"), ('―', "—"), ('俠', "侠"), ('俱', "倶"), ('剝', "剥"),
    ('吞', "呑"), ('啞', "唖"), ('噓', "嘘"), ('嚙', "噛"), ('囊', "嚢"),
    ('塡', "填"), ('姸', "妍"), ('屛', "屏"), ('屢', "屡"), ('幷', "并"),
    ('搔', "掻"), ('摑', "掴"), ('攢', "攅"), ('杮', "柿"), ('沪', "濾"),
    ('潑', "溌"), ('瀆', "涜"), ('焰', "焔"), ('瞱', "曄"), ('簞', "箪"),
    ('繡', "繍"), ('繫', "繋"), ('萊', "莱"), ('蔣', "蒋"), ('蟬', "蝉"),
    ('蠟', "蝋"), ('軀', "躯"), ('醬', "醤"), ('醱', "醗"), ('頰', "頬"),
    ('顚', "顛"), ('驒', "騨"), ('鷗', "鴎"), ('鹼', "鹸"), ('麴', "麹"),
    ('䇳', "箋"), ('倂', "併"), ('卽', "即"), ('巢', "巣"), ('徵', "徴"),
    ('戾', "戻"), ('揭', "掲"), ('擊', "撃"), ('晚', "晩"), ('曆', "暦"),
    ('槪', "概"), ('步', "歩"), ('歷', "歴"), ('每', "毎"), ('涉', "渉"),
    ('淚', "涙"), ('渴', "渇"), ('溫', "温"), ('狀', "状"), ('瘦', "痩"),
    ('硏', "研"), ('禱', "祷"), ('緣', "縁"), ('虛', "虚"), ('錄', "録"),
    ('鍊', "錬"), ('鬭', "闘"), ('麵', "麺"), ('黃', "黄"), ('\u{F91D}', "欄"),
    ('\u{F928}', "廊"), ('\u{F936}', "虜"), ('\u{F970}', "殺"), ('\u{F9D0}', "類"), ('\u{FA30}', "侮"),
    ('\u{FA31}', "僧"), ('\u{FA32}', "免"), ('\u{FA33}', "勉"), ('\u{FA34}', "勤"), ('\u{FA35}', "卑"),
    ('\u{FA36}', "喝"), ('\u{FA37}', "嘆"), ('\u{FA38}', "器"), ('\u{FA39}', "塀"), ('\u{FA3A}', "墨"),
    ('\u{FA3B}', "層"), ('\u{FA3D}', "悔"), ('\u{FA3E}', "慨"), ('\u{FA3F}', "憎"), ('\u{FA40}', "懲"),
    ('\u{FA41}', "敏"), ('\u{FA42}', "既"), ('\u{FA43}', "暑"), ('\u{FA44}', "梅"), ('\u{FA45}', "海"),
    ('\u{FA46}', "渚"), ('\u{FA47}', "漢"), ('\u{FA48}', "煮"), ('\u{FA4A}', "琢"), ('\u{FA4B}', "碑"),
    ('\u{FA4C}', "社"), ('\u{FA4D}', "祉"), ('\u{FA4E}', "祈"), ('\u{FA4F}', "祐"), ('\u{FA50}', "祖"),
    ('\u{FA51}', "祝"), ('\u{FA52}', "禍"), ('\u{FA53}', "禎"), ('\u{FA54}', "穀"), ('\u{FA55}', "突"),
    ('\u{FA56}', "節"), ('\u{FA57}', "練"), ('\u{FA59}', "繁"), ('\u{FA5A}', "署"), ('\u{FA5B}', "者"),
    ('\u{FA5C}', "臭"), ('\u{FA5F}', "著"), ('\u{FA60}', "褐"), ('\u{FA61}', "視"), ('\u{FA62}', "謁"),
    ('\u{FA63}', "謹"), ('\u{FA64}', "賓"), ('\u{FA65}', "贈"), ('\u{FA67}', "逸"), ('\u{FA68}', "難"),
    ('\u{FA69}', "響"), ('\u{FA6A}', "頻"), ('\u{20B9F}', "叱"),
];

/// 互換性のない文字を置き換える下駄記号
pub const GETA_MARK: char = '〓';
