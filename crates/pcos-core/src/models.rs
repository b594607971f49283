//! 核心数据模型定义
//!
//! 检验面板、诊断标准、表型和诊断报告。报告字段名与标签字符串
//! 是对外的稳定协议，消费方按字节依赖。

use serde::{Deserialize, Serialize, Serializer};

/// 周期长度默认值（天）
pub const DEFAULT_CYCLE_LENGTH_DAYS: f64 = 28.0;
/// 年周期次数默认值
pub const DEFAULT_CYCLES_PER_YEAR: u32 = 12;
/// SHBG默认值（防止除零）
pub const DEFAULT_SHBG: f64 = 1.0;

/// 检验面板原始输入
///
/// 所有字段可缺省，缺省时在 [`resolve`](LabPanelInput::resolve) 中
/// 填充临床默认值。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabPanelInput {
    // 月经史
    pub cycle_length_days: Option<f64>,
    pub cycles_per_year: Option<u32>,

    // 血清激素
    pub total_testosterone: Option<f64>,
    pub shbg: Option<f64>,

    // 代谢指标
    pub fasting_insulin: Option<f64>,
    pub fasting_glucose: Option<f64>,

    // 排除性指标
    pub tsh: Option<f64>,
    pub prolactin: Option<f64>,
    pub crp: Option<f64>,

    // 超声形态
    pub follicle_count_left: Option<u32>,
    pub follicle_count_right: Option<u32>,
    pub ovarian_volume_left: Option<f64>,
    pub ovarian_volume_right: Option<f64>,
}

impl LabPanelInput {
    /// 解析为完整面板，一次性填充所有默认值
    ///
    /// 缺省周期史按规律周期处理（28天/12次），其余缺省为0。
    /// SHBG为0或缺省时归一为1，负值一律钳制为0。
    pub fn resolve(self) -> LabPanel {
        let shbg = match self.shbg {
            Some(v) if v > 0.0 => v,
            _ => DEFAULT_SHBG,
        };

        LabPanel {
            cycle_length_days: clamp_non_negative(
                self.cycle_length_days.unwrap_or(DEFAULT_CYCLE_LENGTH_DAYS),
            ),
            cycles_per_year: self.cycles_per_year.unwrap_or(DEFAULT_CYCLES_PER_YEAR),
            total_testosterone: clamp_non_negative(self.total_testosterone.unwrap_or(0.0)),
            shbg,
            fasting_insulin: clamp_non_negative(self.fasting_insulin.unwrap_or(0.0)),
            fasting_glucose: clamp_non_negative(self.fasting_glucose.unwrap_or(0.0)),
            tsh: clamp_non_negative(self.tsh.unwrap_or(0.0)),
            prolactin: clamp_non_negative(self.prolactin.unwrap_or(0.0)),
            crp: clamp_non_negative(self.crp.unwrap_or(0.0)),
            follicle_count_left: self.follicle_count_left.unwrap_or(0),
            follicle_count_right: self.follicle_count_right.unwrap_or(0),
            ovarian_volume_left: clamp_non_negative(self.ovarian_volume_left.unwrap_or(0.0)),
            ovarian_volume_right: clamp_non_negative(self.ovarian_volume_right.unwrap_or(0.0)),
        }
    }
}

fn clamp_non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// 解析后的检验面板
///
/// 所有字段非负，`shbg` 恒为正。一次评估期间不可变。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabPanel {
    pub cycle_length_days: f64,
    pub cycles_per_year: u32,
    pub total_testosterone: f64,
    pub shbg: f64,
    pub fasting_insulin: f64,
    pub fasting_glucose: f64,
    pub tsh: f64,
    pub prolactin: f64,
    pub crp: f64,
    pub follicle_count_left: u32,
    pub follicle_count_right: u32,
    pub ovarian_volume_left: f64,
    pub ovarian_volume_right: f64,
}

impl Default for LabPanel {
    fn default() -> Self {
        LabPanelInput::default().resolve()
    }
}

impl LabPanel {
    /// 游离雄激素指数 FAI = 总睾酮 / SHBG × 100
    ///
    /// 即使面板被手工构造成 `shbg <= 0` 也不会除零。
    pub fn fai(&self) -> f64 {
        let shbg = if self.shbg > 0.0 { self.shbg } else { DEFAULT_SHBG };
        self.total_testosterone / shbg * 100.0
    }

    /// 胰岛素抵抗指数 HOMA-IR = 空腹胰岛素 × 空腹血糖 / 405
    pub fn homa_ir(&self) -> f64 {
        self.fasting_insulin * self.fasting_glucose / 405.0
    }
}

/// Rotterdam诊断标准
///
/// 固定顺序 A → B → C，报告中的 `criteria_met` 始终按此排序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// A: 稀发排卵/无排卵
    OligoAnovulation,
    /// B: 高雄激素血症
    Hyperandrogenism,
    /// C: 多囊样卵巢形态
    PolycysticMorphology,
}

impl Criterion {
    /// 全部标准，按固定报告顺序
    pub const ALL: [Criterion; 3] = [
        Criterion::OligoAnovulation,
        Criterion::Hyperandrogenism,
        Criterion::PolycysticMorphology,
    ];

    /// 报告中使用的标准标签
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::OligoAnovulation => "Oligo-anovulation (Irregular Cycles)",
            Criterion::Hyperandrogenism => "Hyperandrogenism (High Hormones)",
            Criterion::PolycysticMorphology => "Polycystic Morphology (Ultrasound)",
        }
    }
}

impl Serialize for Criterion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 排除性警报
///
/// 混杂内分泌疾病未排除时触发，诊断流程立即短路。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionAlert {
    /// TSH > 4.5，疑似甲状腺功能减退
    HighTsh,
    /// 泌乳素 > 25，高泌乳素血症
    HighProlactin,
}

impl ExclusionAlert {
    /// 警报消息文本
    pub fn message(&self) -> &'static str {
        match self {
            ExclusionAlert::HighTsh => "High TSH (Possible Hypothyroidism)",
            ExclusionAlert::HighProlactin => "High Prolactin (Hyperprolactinemia)",
        }
    }
}

impl Serialize for ExclusionAlert {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

impl std::fmt::Display for ExclusionAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// 机制学表型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phenotype {
    /// 胰岛素抵抗型
    InsulinResistant,
    /// 炎症型
    Inflammatory,
    /// 高雄激素型
    Hyperandrogenic,
    /// 停药后/轻度型
    PostPill,
    /// 肾上腺/未分类型
    Adrenal,
    /// 未确诊或未计算
    Unknown,
}

impl Phenotype {
    /// 报告中使用的表型标签
    pub fn label(&self) -> &'static str {
        match self {
            Phenotype::InsulinResistant => "Insulin-Resistant PCOS",
            Phenotype::Inflammatory => "Inflammatory PCOS",
            Phenotype::Hyperandrogenic => "Hyperandrogenic PCOS",
            Phenotype::PostPill => "Post-Pill / Mild PCOS",
            Phenotype::Adrenal => "Adrenal/Unspecified PCOS",
            Phenotype::Unknown => "Unknown",
        }
    }

    /// 与表型1:1配对的生活方式协议
    pub fn lifestyle_protocol(&self) -> &'static str {
        match self {
            Phenotype::InsulinResistant => {
                "Protocol A: Low-GI Diet + Inositol + Strength Training"
            }
            Phenotype::Inflammatory => {
                "Protocol D: Gluten/Dairy Free + Anti-inflammatory Support"
            }
            Phenotype::Hyperandrogenic => "Protocol B: Spearmint Tea + Zinc + Stress Management",
            Phenotype::PostPill => "Protocol C: Nutrient Repletion (Mg, Zinc, B6)",
            Phenotype::Adrenal => {
                "Protocol E: Sleep Hygiene + Cortisol Regulation (Yoga/Meditation)"
            }
            Phenotype::Unknown => "Generic Healthy Living",
        }
    }

    /// 推荐引擎使用的稳定标识符
    ///
    /// `Unknown` 没有对应的协议规则，返回 `None`。
    pub fn identifier(&self) -> Option<&'static str> {
        match self {
            Phenotype::InsulinResistant => Some("insulin_resistant"),
            Phenotype::Inflammatory => Some("inflammatory"),
            Phenotype::Hyperandrogenic => Some("hyperandrogenic"),
            Phenotype::PostPill => Some("post_pill"),
            Phenotype::Adrenal => Some("adrenal"),
            Phenotype::Unknown => None,
        }
    }
}

impl Serialize for Phenotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for Phenotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// "Review Needed" 状态字符串
pub const REVIEW_NEEDED_STATUS: &str = "Review Needed";

/// 诊断搁置通知
///
/// 排除性警报触发时返回，不计算任何标准或表型。
/// 这是有效结果而非错误，表示需先完成其它检查。
#[derive(Debug, Clone, Serialize)]
pub struct ReviewNotice {
    pub status: String,
    pub alerts: Vec<ExclusionAlert>,
}

impl ReviewNotice {
    pub fn new(alerts: Vec<ExclusionAlert>) -> Self {
        Self {
            status: REVIEW_NEEDED_STATUS.to_string(),
            alerts,
        }
    }
}

/// 诊断报告
///
/// 每次评估新建一份，写入后不再修改，由调用方负责存储与传输。
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    /// 满足的标准，固定按 A → B → C 排序
    pub criteria_met: Vec<Criterion>,
    /// Rotterdam投票结果：至少2/3标准满足
    pub diagnosis: bool,
    pub phenotype: Phenotype,
    pub lifestyle_protocol: String,
}

impl DiagnosisReport {
    /// 阴性或尚未表型化的报告
    pub fn negative(criteria_met: Vec<Criterion>) -> Self {
        Self {
            criteria_met,
            diagnosis: false,
            phenotype: Phenotype::Unknown,
            lifestyle_protocol: Phenotype::Unknown.lifestyle_protocol().to_string(),
        }
    }
}

/// 评估结果
///
/// 两种形态：排除性警报触发时为 `ReviewNeeded`，否则为完整报告。
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    ReviewNeeded(ReviewNotice),
    Report(DiagnosisReport),
}

impl Evaluation {
    /// 是否为阳性诊断
    pub fn is_positive(&self) -> bool {
        matches!(self, Evaluation::Report(r) if r.diagnosis)
    }

    /// 诊断报告（如有）
    pub fn report(&self) -> Option<&DiagnosisReport> {
        match self {
            Evaluation::Report(r) => Some(r),
            Evaluation::ReviewNeeded(_) => None,
        }
    }
}
