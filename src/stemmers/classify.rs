use enumset::{EnumSet, EnumSetType};

/// Contexts in which a semivowel stops acting as a vowel. A promoted letter
/// is rewritten to its uppercase form, which no vowel set contains.
#[derive(Debug, EnumSetType)]
pub enum Promotion {
    InitialY,
    YAfterVowel,
    YBeforeVowel,
    YBetweenVowels,
    UBetweenVowels,
    IBetweenVowels,
    UAfterQ,
}

/// Marks the consonant-acting semivowels of `chars`.
///
/// `u` after `q` is rewritten first, since it is purely lexical. The other
/// promotions look at the vowel status every neighbour had before this pass
/// started, so a letter promoted earlier in the scan still counts as a vowel
/// for the letters after it.
pub fn classify(chars: &mut [char], vowels: &str, promotions: EnumSet<Promotion>) {
    if promotions.is_empty() {
        return;
    }

    if promotions.contains(Promotion::UAfterQ) {
        for i in 1..chars.len() {
            if chars[i] == 'u' && chars[i - 1] == 'q' {
                chars[i] = 'U';
            }
        }
    }

    let snapshot: Vec<bool> = chars.iter().map(|c| vowels.contains(*c)).collect();

    for (i, c) in chars.iter_mut().enumerate() {
        let before = i.checked_sub(1).is_some_and(|j| snapshot[j]);
        let after = snapshot.get(i + 1).copied().unwrap_or(false);

        let promoted = match *c {
            'y' => {
                (i == 0 && promotions.contains(Promotion::InitialY))
                    || (before && promotions.contains(Promotion::YAfterVowel))
                    || (after && promotions.contains(Promotion::YBeforeVowel))
                    || (before && after && promotions.contains(Promotion::YBetweenVowels))
            }
            'u' => before && after && promotions.contains(Promotion::UBetweenVowels),
            'i' => before && after && promotions.contains(Promotion::IBetweenVowels),
            _ => false,
        };

        if promoted {
            *c = c.to_ascii_uppercase();
        }
    }
}
