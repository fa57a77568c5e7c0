//! Pattern: Strategy (a.k.a. Policy)
//! Category: Behavioral
//!
//! A family of income tax algorithms behind one signature. The calculator
//! never knows which one it holds; it just delegates.

/// One way of computing a tax from an income.
pub trait TaxStrategy {
    fn calculate(&self, income: f64) -> f64;
}

/// Flat-rate income tax.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NyTaxStrategy {
    pub rate: f64,
}

impl NyTaxStrategy {
    pub const DEFAULT_RATE: f64 = 0.1;
}

impl Default for NyTaxStrategy {
    fn default() -> Self {
        Self {
            rate: Self::DEFAULT_RATE,
        }
    }
}

impl TaxStrategy for NyTaxStrategy {
    fn calculate(&self, income: f64) -> f64 {
        income * self.rate
    }
}

/// No state income tax at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TxTaxStrategy;

impl TaxStrategy for TxTaxStrategy {
    fn calculate(&self, _income: f64) -> f64 {
        0.0
    }
}

pub struct TaxCalculator {
    strategy: Box<dyn TaxStrategy>,
}

impl TaxCalculator {
    pub fn new(strategy: Box<dyn TaxStrategy>) -> Self {
        Self { strategy }
    }

    pub fn tax_amount(&self, income: f64) -> f64 {
        self.strategy.calculate(income)
    }

    /// Replace the whole strategy; the old one is dropped.
    pub fn set_strategy(&mut self, strategy: Box<dyn TaxStrategy>) {
        self.strategy = strategy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ny_tax_is_ten_percent() {
        let calculator = TaxCalculator::new(Box::new(NyTaxStrategy::default()));
        assert_eq!(calculator.tax_amount(60_000.0), 6000.0);
    }

    #[test]
    fn test_tx_tax_is_always_zero() {
        let calculator = TaxCalculator::new(Box::new(TxTaxStrategy));
        for income in [0.0, 1.0, 60_000.0, 1e12, -500.0] {
            assert_eq!(calculator.tax_amount(income), 0.0);
        }
    }

    #[test]
    fn test_custom_rate() {
        let strategy = NyTaxStrategy { rate: 0.25 };
        assert_eq!(strategy.calculate(1000.0), 250.0);
    }

    #[test]
    fn test_swap_strategy() {
        let mut calculator = TaxCalculator::new(Box::new(NyTaxStrategy::default()));
        assert_eq!(calculator.tax_amount(60_000.0), 6000.0);

        calculator.set_strategy(Box::new(TxTaxStrategy));
        assert_eq!(calculator.tax_amount(60_000.0), 0.0);
    }

    #[test]
    fn test_user_defined_strategy() {
        struct Doubling;
        impl TaxStrategy for Doubling {
            fn calculate(&self, income: f64) -> f64 {
                income * 2.0
            }
        }

        let calculator = TaxCalculator::new(Box::new(Doubling));
        assert_eq!(calculator.tax_amount(3.0), 6.0);
    }
}
