use serde::{Deserialize, Serialize};

/// 單筆輸入的轉換結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub value: Option<u64>,
    pub error: Option<String>,
}

impl Conversion {
    pub fn success(input: &str, value: u64) -> Self {
        Self {
            input: input.to_string(),
            value: Some(value),
            error: None,
        }
    }

    pub fn failure(input: &str, message: String) -> Self {
        Self {
            input: input.to_string(),
            value: None,
            error: Some(message),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub conversions: Vec<Conversion>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.conversions.iter().filter(|c| c.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.conversions.len() - self.succeeded()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// 有任何無效輸入時回傳 1
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            0
        } else {
            1
        }
    }
}
