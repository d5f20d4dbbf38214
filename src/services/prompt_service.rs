//! 提示词构建服务
//!
//! 将股票代码和日期代入固定的印尼语分析模板，
//! 模板在启动时注册并校验，渲染过程为纯函数

use anyhow::{Context, Result};
use minijinja::{context, Environment, UndefinedBehavior};

// ==================== 模板定义 ====================

/// 个股分析模板
///
/// 占位符: stock_code / date / stock_context / company_name
const STOCK_ANALYSIS_TEMPLATE: &str = r#"Anda adalah senior portfolio manager dari investment firm terkemuka di Jakarta dengan akses ke Bloomberg terminal dan data real-time. Klien Anda meminta analisis trading untuk saham {{ stock_code }} pada {{ date }}.

{{ stock_context }}

IMPORTANT CONTEXT: Ini adalah analisis internal untuk klien professional dengan modal Rp 7.5 juta. Berikan analisis praktis dan actionable.

TRADING PROFILE:
- Capital: Rp 7,500,000
- Target: 4-5% profit per trade
- Style: Active day/swing trading
- Risk tolerance: Medium-aggressive

ANALISIS PROFESIONAL UNTUK {{ stock_code }}:

**STOCK DATA CURRENT**
- Company: {{ company_name }}
- Sector: [Based on your knowledge]
- Current price: Rp [Provide realistic estimate]
- Daily volume: [Typical volume for this stock]
- Market cap: [Calculate based on shares outstanding]

**TECHNICAL ANALYSIS**
- Trend: [Current short-term trend]
- Support levels: Rp [2 key levels]
- Resistance levels: Rp [2 key levels]
- RSI (14): [Estimate current level]
- MACD status: [Above/below signal line]
- Volume pattern: [Recent volume vs average]

**FUNDAMENTAL SNAPSHOT**
- Recent earnings: [Latest quarter performance]
- Revenue growth: [YoY growth rate]
- Industry outlook: [Sector conditions]
- Key catalysts: [Upcoming events/news]

**TRADING RECOMMENDATION**

Entry Decision: [BUY/HOLD/AVOID]

If BUY:
- Entry zone: Rp [specific range]
- Target 1 (4%): Rp [exact price]
- Target 2 (5%): Rp [exact price]
- Stop loss: Rp [price level]
- Position size: Rp [amount from 7.5M]
- Timeline: [1-3 days]

If AVOID:
- Reason: [Specific issues]
- Wait for: [Better conditions]
- Alternative: [Better stock picks]

**RISK FACTORS**
- Volatility: [High/Medium/Low]
- Liquidity: [Easy/Difficult to exit]
- Market correlation: [Beta estimate]

**EXECUTION PLAN**
- Best entry time: [Market hours preference]
- Order type: [Market/Limit recommendation]
- Monitoring: [Key levels to watch]

Confidence: [1-10] with rationale

Provide practical, actionable analysis based on current market knowledge for Indonesian stocks. Focus on realistic price levels and executable strategy for Rp 7.5M capital."#;

/// 每日荐股模板
///
/// 占位符: date
const DAILY_RECOMMENDATIONS_TEMPLATE: &str = r#"Anda adalah seorang analis saham Indonesia yang berpengalaman. Berikan rekomendasi saham harian untuk trading dengan brief konsisten berikut:

PROFIL TRADER:
- Modal: Rp 7,5 juta
- Target profit: 4-5% per trade
- Frekuensi: 3x seminggu atau daily trading
- Strategi: Entry saat reversal, take profit cepat

TUGAS ANDA:
Berikan analisis mendalam untuk tanggal {{ date }} dan rekomendasikan 2-3 saham terbaik untuk entry hari ini dengan potensi profit 4-5% besok/lusa.

FORMAT ANALISIS:
1. **RINGKASAN PASAR** - Kondisi IHSG, sentimen global, berita makro hari ini
2. **REKOMENDASI SAHAM** - Untuk setiap saham berikan:
   - Kode saham & nama perusahaan
   - Harga saat ini & target price
   - Alasan fundamental (laporan keuangan, berita, proyeksi)
   - Analisis teknikal (candlestick, support/resistance, volume, RSI, MACD)
   - Level entry yang tepat
   - Take profit & stop loss
   - Confidence level (High/Medium/Low)
3. **RISK MANAGEMENT** - Saran alokasi modal dan manajemen risiko
4. **TIMING** - Kapan waktu terbaik entry (opening, mid-day, closing)

KRITERIA SAHAM:
- Likuiditas tinggi (easy exit)
- Volatilitas cukup untuk profit 4-5%
- Fundamental tidak bermasalah
- Pattern teknikal mendukung
- Volume trading memadai

Berikan analisis yang detail, praktis, dan actionable. Fokus pada saham-saham yang realistis bisa memberikan return 4-5% dalam 1-2 hari trading."#;

// ==================== 静态行情背景 ====================

/// 查询公司全称
///
/// 未收录的代码按印尼上市公司命名惯例兜底
pub fn company_name(stock_code: &str) -> String {
    match stock_code {
        "CDIA" => "PT Chandra Daya Investasi Tbk".to_string(),
        "GOTO" => "PT GoTo Gojek Tokopedia Tbk".to_string(),
        "BBCA" => "PT Bank Central Asia Tbk".to_string(),
        "BBRI" => "PT Bank Rakyat Indonesia Tbk".to_string(),
        "BMRI" => "PT Bank Mandiri Tbk".to_string(),
        "ASII" => "PT Astra International Tbk".to_string(),
        "UNVR" => "PT Unilever Indonesia Tbk".to_string(),
        "TLKM" => "PT Telkom Indonesia Tbk".to_string(),
        "COIN" => "PT Digital Coin Indonesia Tbk".to_string(),
        "CUAN" => "PT Arha Capital Tbk".to_string(),
        _ => format!("PT {} Tbk", stock_code),
    }
}

/// 查询固定行情背景描述
///
/// 仅收录少数热门代码，其余返回通用兜底文案
pub fn stock_context(stock_code: &str) -> &'static str {
    match stock_code {
        "CDIA" => {
            "CURRENT MARKET DATA (Chandra Daya Investasi):\n\
             Recent IPO with strong post-listing performance. Infrastructure/energy sector play, \
             subsidiary of TPIA (Chandra Asri). Price range: 1,400-1,700 area based on recent \
             trading. High volatility post-IPO typical. Multiple auto rejection atas (ARA) events. \
             Strong fundamental backing from parent company. High retail interest. Trading volume \
             varies significantly."
        }
        "GOTO" => {
            "CURRENT MARKET DATA (GoTo Gojek Tokopedia):\n\
             Established tech stock, large cap with high liquidity. Super app ecosystem business \
             model. Typical trading range 100-150 based on historical patterns. Medium volatility \
             suitable for swing trading. High daily volume, easy entry/exit. Focus on path to \
             profitability, strong user metrics."
        }
        "BBCA" => {
            "CURRENT MARKET DATA (Bank Central Asia):\n\
             Premium Indonesian bank, highest quality banking stock. Typical range 8,000-10,000 \
             based on historical. Low-medium volatility. Excellent liquidity. Consistent dividend \
             payer. Strong digital banking. Defensive play with quality fundamentals."
        }
        "BBRI" => {
            "CURRENT MARKET DATA (Bank Rakyat Indonesia):\n\
             Large government-related bank, strong SME/rural network. Typical range 4,000-5,500. \
             Low-medium volatility. High liquidity. Government backing provides stability. Solid \
             dividend history."
        }
        "CUAN" => {
            "CURRENT MARKET DATA (Arha Capital):\n\
             Digital asset/crypto-related investment company. High volatility correlated with \
             crypto markets. Speculative stock with high beta. Suitable for aggressive momentum \
             traders."
        }
        "COIN" => {
            "CURRENT MARKET DATA (Digital Coin):\n\
             Crypto-related business model. Extreme volatility following crypto market sentiment. \
             High risk, high reward potential. Momentum-driven trading."
        }
        _ => {
            "MARKET DATA: Analyze based on sector characteristics and provide realistic price \
             estimates for Indonesian market conditions."
        }
    }
}

// ==================== 渲染服务 ====================

/// 提示词模板服务
///
/// 启动时注册全部模板并做一次渲染校验，
/// 任何占位符缺失都会在进程启动阶段暴露
pub struct PromptService {
    env: Environment<'static>,
}

impl PromptService {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // 未定义变量直接报错，防止模板渲染出残缺提示词
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template("stock_analysis", STOCK_ANALYSIS_TEMPLATE)
            .context("注册 stock_analysis 模板失败")?;
        env.add_template("daily_recommendations", DAILY_RECOMMENDATIONS_TEMPLATE)
            .context("注册 daily_recommendations 模板失败")?;

        let service = Self { env };

        // 启动校验：用代表性上下文渲染一遍，确认占位符齐全
        service
            .render_stock_analysis("BBCA", "2024-01-01")
            .context("stock_analysis 模板校验失败")?;
        service
            .render_daily_recommendations("2024-01-01")
            .context("daily_recommendations 模板校验失败")?;

        Ok(service)
    }

    /// 渲染个股分析提示词
    pub fn render_stock_analysis(&self, stock_code: &str, date: &str) -> Result<String> {
        let template = self.env.get_template("stock_analysis")?;
        let rendered = template.render(context! {
            stock_code => stock_code,
            date => date,
            company_name => company_name(stock_code),
            stock_context => stock_context(stock_code),
        })?;
        Ok(rendered)
    }

    /// 渲染每日荐股提示词
    pub fn render_daily_recommendations(&self, date: &str) -> Result<String> {
        let template = self.env.get_template("daily_recommendations")?;
        let rendered = template.render(context! { date => date })?;
        Ok(rendered)
    }
}

// ==================== 测试模块 ====================

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试公司全称查询
    #[test]
    fn test_company_name_known() {
        println!("\n========== 测试公司全称查询 ==========");
        assert_eq!(company_name("BBCA"), "PT Bank Central Asia Tbk");
        assert_eq!(company_name("GOTO"), "PT GoTo Gojek Tokopedia Tbk");
        assert_eq!(company_name("TLKM"), "PT Telkom Indonesia Tbk");
        println!("✅ 公司全称查询测试通过！");
    }

    /// 测试未收录代码的公司名兜底
    #[test]
    fn test_company_name_fallback() {
        println!("\n========== 测试公司名兜底 ==========");
        assert_eq!(company_name("ZZZZ"), "PT ZZZZ Tbk");
    }

    /// 测试行情背景查询
    #[test]
    fn test_stock_context_known() {
        println!("\n========== 测试行情背景查询 ==========");
        assert!(stock_context("BBCA").contains("Bank Central Asia"));
        assert!(stock_context("CUAN").contains("crypto"));
        println!("✅ 行情背景查询测试通过！");
    }

    /// 测试未收录代码的行情背景兜底
    #[test]
    fn test_stock_context_fallback() {
        println!("\n========== 测试行情背景兜底 ==========");
        let context = stock_context("ZZZZ");
        assert!(context.starts_with("MARKET DATA:"));
        assert!(!context.contains("CURRENT MARKET DATA"));
    }

    /// 测试模板服务初始化
    #[test]
    fn test_prompt_service_new() {
        println!("\n========== 测试模板服务初始化 ==========");
        let service = PromptService::new();
        assert!(service.is_ok());
        println!("✅ 模板服务初始化测试通过！");
    }

    /// 测试个股分析模板渲染包含代码和日期
    #[test]
    fn test_render_stock_analysis_substitution() {
        println!("\n========== 测试个股分析模板渲染 ==========");
        let service = PromptService::new().unwrap();
        let prompt = service.render_stock_analysis("BBCA", "2024-01-01").unwrap();

        assert!(prompt.contains("BBCA"));
        assert!(prompt.contains("2024-01-01"));
        assert!(prompt.contains("PT Bank Central Asia Tbk"));
        assert!(prompt.contains("CURRENT MARKET DATA (Bank Central Asia)"));
        println!("  渲染长度: {} 字节", prompt.len());
        println!("✅ 个股分析模板渲染测试通过！");
    }

    /// 测试未收录代码走通用兜底文案
    #[test]
    fn test_render_unknown_ticker_fallback() {
        println!("\n========== 测试未收录代码渲染 ==========");
        let service = PromptService::new().unwrap();
        let prompt = service.render_stock_analysis("ZZZZ", "2024-01-01").unwrap();

        assert!(prompt.contains("ZZZZ"));
        assert!(prompt.contains("PT ZZZZ Tbk"));
        assert!(prompt.contains("MARKET DATA: Analyze based on sector characteristics"));
        assert!(!prompt.contains("CURRENT MARKET DATA"));
        println!("✅ 未收录代码渲染测试通过！");
    }

    /// 测试渲染确定性：相同输入逐字节一致
    #[test]
    fn test_render_deterministic() {
        println!("\n========== 测试渲染确定性 ==========");
        let service = PromptService::new().unwrap();

        let first = service.render_stock_analysis("GOTO", "2024-06-15").unwrap();
        let second = service.render_stock_analysis("GOTO", "2024-06-15").unwrap();
        assert_eq!(first, second);

        let first = service.render_daily_recommendations("2024-06-15").unwrap();
        let second = service.render_daily_recommendations("2024-06-15").unwrap();
        assert_eq!(first, second);
        println!("✅ 渲染确定性测试通过！");
    }

    /// 测试不同日期仅日期子串不同
    #[test]
    fn test_render_differs_only_in_date() {
        println!("\n========== 测试日期替换 ==========");
        let service = PromptService::new().unwrap();

        let a = service.render_daily_recommendations("2024-01-01").unwrap();
        let b = service.render_daily_recommendations("2024-02-02").unwrap();

        assert_ne!(a, b);
        assert_eq!(a.replace("2024-01-01", "DATE"), b.replace("2024-02-02", "DATE"));
        println!("✅ 日期替换测试通过！");
    }

    /// 测试每日荐股模板内容
    #[test]
    fn test_render_daily_recommendations() {
        println!("\n========== 测试每日荐股模板渲染 ==========");
        let service = PromptService::new().unwrap();
        let prompt = service.render_daily_recommendations("2024-01-01").unwrap();

        assert!(prompt.contains("2024-01-01"));
        assert!(prompt.contains("RINGKASAN PASAR"));
        assert!(prompt.contains("REKOMENDASI SAHAM"));
        println!("✅ 每日荐股模板渲染测试通过！");
    }
}
