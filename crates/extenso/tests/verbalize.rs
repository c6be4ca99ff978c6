//! End-to-end tests for spelling amounts in reais.

use extenso::{Amount, Real, VerbalizeError, verbalize};

fn words(amount: f64) -> String {
    verbalize(amount).unwrap()
}

// =========================================================================
// Whole amounts
// =========================================================================

#[test]
fn zero_is_zero_real() {
    assert_eq!(words(0.0), "zero real");
}

#[test]
fn negative_zero_is_zero_real() {
    assert_eq!(words(-0.0), "zero real");
}

#[test]
fn units_and_teens() {
    let expected = [
        "zero real",
        "um real",
        "dois reais",
        "três reais",
        "quatro reais",
        "cinco reais",
        "seis reais",
        "sete reais",
        "oito reais",
        "nove reais",
        "dez reais",
        "onze reais",
        "doze reais",
        "treze reais",
        "quatorze reais",
        "quinze reais",
        "dezesseis reais",
        "dezessete reais",
        "dezoito reais",
        "dezenove reais",
    ];
    for (n, want) in expected.iter().enumerate() {
        assert_eq!(words(n as f64), *want);
    }
}

#[test]
fn round_tens() {
    let expected = [
        "vinte reais",
        "trinta reais",
        "quarenta reais",
        "cinquenta reais",
        "sessenta reais",
        "setenta reais",
        "oitenta reais",
        "noventa reais",
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(words((i * 10 + 20) as f64), *want);
    }
}

#[test]
fn round_hundreds() {
    let expected = [
        "cem reais",
        "duzentos reais",
        "trezentos reais",
        "quatrocentos reais",
        "quinhentos reais",
        "seiscentos reais",
        "setecentos reais",
        "oitocentos reais",
        "novecentos reais",
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(words(((i + 1) * 100) as f64), *want);
    }
}

#[test]
fn one_hundred_and_one() {
    assert_eq!(words(100.0), "cem reais");
    assert_eq!(words(101.0), "cento e um reais");
}

#[test]
fn one_thousand() {
    assert_eq!(words(1000.0), "mil reais");
    assert_eq!(words(1500.0), "um mil e quinhentos reais");
}

#[test]
fn thousands() {
    assert_eq!(words(2015.0), "dois mil e quinze reais");
    assert_eq!(
        words(802_715.0),
        "oitocentos e dois mil e setecentos e quinze reais"
    );
}

#[test]
fn millions() {
    insta::assert_snapshot!(
        words(775_398_007.0),
        @"setecentos e setenta e cinco milhões, trezentos e noventa e oito mil e sete reais"
    );
}

#[test]
fn billions() {
    insta::assert_snapshot!(
        words(1_119_929_521.0),
        @"um bilhão, cento e dezenove milhões, novecentos e vinte e nove mil e quinhentos e vinte e um reais"
    );
}

// =========================================================================
// Centavos
// =========================================================================

#[test]
fn centavos_alone() {
    let cases = [
        (0.01, "um centavo"),
        (0.02, "dois centavos"),
        (0.03, "três centavos"),
        (0.07, "sete centavos"),
        (0.1, "dez centavos"),
        (0.11, "onze centavos"),
        (0.14, "quatorze centavos"),
        (0.19, "dezenove centavos"),
        (0.20, "vinte centavos"),
        (0.22, "vinte e dois centavos"),
        (0.29, "vinte e nove centavos"),
        (0.33, "trinta e três centavos"),
        (0.44, "quarenta e quatro centavos"),
        (0.50, "cinquenta centavos"),
        (0.55, "cinquenta e cinco centavos"),
        (0.57, "cinquenta e sete centavos"),
        (0.66, "sessenta e seis centavos"),
        (0.77, "setenta e sete centavos"),
        (0.88, "oitenta e oito centavos"),
        (0.90, "noventa centavos"),
        (0.99, "noventa e nove centavos"),
    ];
    for (amount, want) in cases {
        assert_eq!(words(amount), want, "{amount}");
    }
}

#[test]
fn reais_and_centavos() {
    assert_eq!(words(1.99), "um real e noventa e nove centavos");
    assert_eq!(
        words(42.69),
        "quarenta e dois reais e sessenta e nove centavos"
    );
    assert_eq!(words(1.01), "um real e um centavo");
    assert_eq!(
        words(2015.5),
        "dois mil e quinze reais e cinquenta centavos"
    );
}

#[test]
fn centavos_round_half_up() {
    assert_eq!(words(0.005), "um centavo");
    assert_eq!(words(0.01234), "um centavo");
}

#[test]
fn half_centavos_round_up_despite_binary_representation() {
    assert_eq!(words(1.005), "um real e um centavo");
    assert_eq!(words(0.145), "quinze centavos");
    assert_eq!(
        words(2.675),
        "dois reais e sessenta e oito centavos"
    );
    assert_eq!(words(10.015), "dez reais e dois centavos");
    assert_eq!(words(0.125), "treze centavos");
}

#[test]
fn just_below_half_centavo_rounds_down() {
    assert_eq!(words(1.0049), "um real");
    assert_eq!(words(0.1449), "quatorze centavos");
}

#[test]
fn large_floats_keep_their_printed_digits() {
    assert_eq!(words(1e35), "cem decilhões reais");
}

#[test]
fn fraction_rounding_to_zero_is_a_whole_amount() {
    assert_eq!(words(5.001), "cinco reais");
    assert_eq!(words(0.001), "zero real");
}

#[test]
fn fraction_rounding_to_a_real_carries() {
    assert_eq!(words(0.995), "um real");
    assert_eq!(words(1.999), "dois reais");
}

#[test]
fn spelling_is_deterministic() {
    for amount in [0.0, 1.99, 42.69, 775_398_007.0, 1_119_929_521.0] {
        assert_eq!(verbalize(amount), verbalize(amount));
    }
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn negative_amounts_are_invalid() {
    for amount in [-1.0, -0.01, -1e30, f64::NEG_INFINITY] {
        assert_eq!(
            verbalize(amount),
            Err(VerbalizeError::InvalidAmount { amount })
        );
    }
}

#[test]
fn nan_is_invalid() {
    assert!(matches!(
        verbalize(f64::NAN),
        Err(VerbalizeError::InvalidAmount { .. })
    ));
}

#[test]
fn huge_amounts_are_unsupported() {
    for amount in [1e36, 1e300, f64::INFINITY] {
        assert!(
            matches!(
                verbalize(amount),
                Err(VerbalizeError::UnsupportedMagnitude { .. })
            ),
            "{amount}"
        );
    }
}

#[test]
fn error_messages_are_distinct() {
    let invalid = verbalize(-1.0).unwrap_err().to_string();
    assert_eq!(
        invalid,
        "cannot spell -1: amount must be a non-negative number"
    );

    let unsupported = Amount::from_cents(u128::MAX).to_words().unwrap_err();
    let message = unsupported.to_string();
    assert!(message.contains("too large"));
    assert!(message.contains("decilhão"));
    assert_ne!(invalid, message);
}

// =========================================================================
// Amount and Real
// =========================================================================

#[test]
fn amount_from_cents_is_exact() {
    let amount = Amount::from_cents(4269);
    assert_eq!(amount.units(), 42);
    assert_eq!(amount.cents(), 69);
    assert_eq!(
        amount.to_words().unwrap(),
        "quarenta e dois reais e sessenta e nove centavos"
    );
}

#[test]
fn amount_from_cents_spells_beyond_float_precision() {
    let amount = Amount::from_cents(100_000_000_000_000_000_001);
    assert_eq!(
        amount.to_words().unwrap(),
        "um quintilhão reais e um centavo"
    );
}

#[test]
fn real_por_extenso_matches_verbalize() {
    let real = Real::new(1.99);
    assert_eq!(real.value(), 1.99);
    assert_eq!(real.por_extenso(), verbalize(1.99));
    assert_eq!(real.to_words(), verbalize(1.99));
    assert_eq!(Real::from(2015u32).por_extenso().unwrap(), "dois mil e quinze reais");
}

#[test]
fn real_serializes_as_a_plain_number() {
    let json = serde_json::to_string(&Real::new(42.69)).unwrap();
    assert_eq!(json, "42.69");

    let real: Real = serde_json::from_str("1.99").unwrap();
    assert_eq!(real.por_extenso().unwrap(), "um real e noventa e nove centavos");
}
