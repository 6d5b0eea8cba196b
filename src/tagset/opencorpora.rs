// File: src/tagset/opencorpora.rs
//
// OpenCorpora grammeme hierarchy. Dictionaries ship their own
// `grammemes.json`; this table is what the builder writes into new ones.

/// (name, parent, alias, description)
pub type GrammemeRow = (&'static str, &'static str, &'static str, &'static str);

pub const GRAMMEMES: &[GrammemeRow] = &[
    ("POST", "", "ЧР", "часть речи"),
    ("NOUN", "POST", "СУЩ", "имя существительное"),
    ("ADJF", "POST", "ПРИЛ", "имя прилагательное (полное)"),
    ("ADJS", "POST", "КР_ПРИЛ", "имя прилагательное (краткое)"),
    ("COMP", "POST", "КОМП", "компаратив"),
    ("VERB", "POST", "ГЛ", "глагол (личная форма)"),
    ("INFN", "POST", "ИНФ", "глагол (инфинитив)"),
    ("PRTF", "POST", "ПРИЧ", "причастие (полное)"),
    ("PRTS", "POST", "КР_ПРИЧ", "причастие (краткое)"),
    ("GRND", "POST", "ДЕЕПР", "деепричастие"),
    ("NUMR", "POST", "ЧИСЛ", "числительное"),
    ("ADVB", "POST", "Н", "наречие"),
    ("NPRO", "POST", "МС", "местоимение-существительное"),
    ("PRED", "POST", "ПРЕДК", "предикатив"),
    ("PREP", "POST", "ПР", "предлог"),
    ("CONJ", "POST", "СОЮЗ", "союз"),
    ("PRCL", "POST", "ЧАСТ", "частица"),
    ("INTJ", "POST", "МЕЖД", "междометие"),
    ("LATN", "POST", "ЛАТ", "токен состоит из латинских букв"),
    ("PNCT", "POST", "ЗПР", "пунктуация"),
    ("NUMB", "POST", "ЧИСЛО", "число"),
    ("intg", "NUMB", "цел", "целое число"),
    ("real", "NUMB", "вещ", "вещественное число"),
    ("ROMN", "POST", "РИМ", "римское число"),
    ("UNKN", "POST", "НЕИЗВ", "токен не удалось разобрать"),
    ("ANim", "", "Од-неод", "категория одушевлённости"),
    ("anim", "ANim", "од", "одушевлённое"),
    ("inan", "ANim", "неод", "неодушевлённое"),
    ("GNdr", "", "хр", "род / род не выражен"),
    ("masc", "GNdr", "мр", "мужской род"),
    ("femn", "GNdr", "жр", "женский род"),
    ("neut", "GNdr", "ср", "средний род"),
    ("ms-f", "GNdr", "мж", "общий род"),
    ("NMbr", "", "Число", "число"),
    ("sing", "NMbr", "ед", "единственное число"),
    ("plur", "NMbr", "мн", "множественное число"),
    ("Sgtm", "", "sg", "singularia tantum"),
    ("Pltm", "", "pl", "pluralia tantum"),
    ("Fixd", "", "0", "неизменяемое"),
    ("CAse", "", "ПАДЕЖ", "категория падежа"),
    ("nomn", "CAse", "им", "именительный падеж"),
    ("gent", "CAse", "рд", "родительный падеж"),
    ("datv", "CAse", "дт", "дательный падеж"),
    ("accs", "CAse", "вн", "винительный падеж"),
    ("ablt", "CAse", "тв", "творительный падеж"),
    ("loct", "CAse", "пр", "предложный падеж"),
    ("voct", "nomn", "зв", "звательный падеж"),
    ("gen1", "gent", "рд1", "первый родительный падеж"),
    ("gen2", "gent", "рд2", "второй родительный (частичный) падеж"),
    ("acc2", "accs", "вн2", "второй винительный падеж"),
    ("loc1", "loct", "пр1", "первый предложный падеж"),
    ("loc2", "loct", "пр2", "второй предложный (местный) падеж"),
    ("Abbr", "", "аббр", "аббревиатура"),
    ("Name", "", "имя", "имя"),
    ("Surn", "", "фам", "фамилия"),
    ("Patr", "", "отч", "отчество"),
    ("Geox", "", "гео", "топоним"),
    ("Orgn", "", "орг", "организация"),
    ("Trad", "", "tm", "торговая марка"),
    ("Subx", "", "субст?", "возможна субстантивация"),
    ("Supr", "", "превосх", "превосходная степень"),
    ("Qual", "", "кач", "качественное"),
    ("Apro", "", "мест-п", "местоименное"),
    ("Anum", "", "числ-п", "порядковое"),
    ("Poss", "", "притяж", "притяжательное"),
    ("V-ey", "", "*ею", "форма на -ею"),
    ("V-oy", "", "*ою", "форма на -ою"),
    ("Cmp2", "", "сравн2", "сравнительная степень на по-"),
    ("V-ej", "", "*ей", "форма компаратива на -ей"),
    ("ASpc", "", "Вид", "категория вида"),
    ("perf", "ASpc", "сов", "совершенный вид"),
    ("impf", "ASpc", "несов", "несовершенный вид"),
    ("TRns", "", "Перех", "категория переходности"),
    ("tran", "TRns", "перех", "переходный"),
    ("intr", "TRns", "неперех", "непереходный"),
    ("Impe", "", "безл", "безличный"),
    ("Impx", "", "безл?", "возможно безличное употребление"),
    ("Mult", "", "мног", "многократный"),
    ("Refl", "", "возвр", "возвратный"),
    ("PErs", "", "Лицо", "категория лица"),
    ("1per", "PErs", "1л", "1 лицо"),
    ("2per", "PErs", "2л", "2 лицо"),
    ("3per", "PErs", "3л", "3 лицо"),
    ("TEns", "", "Время", "категория времени"),
    ("pres", "TEns", "наст", "настоящее время"),
    ("past", "TEns", "прош", "прошедшее время"),
    ("futr", "TEns", "буд", "будущее время"),
    ("MOod", "", "Накл", "категория наклонения"),
    ("indc", "MOod", "изъяв", "изъявительное наклонение"),
    ("impr", "MOod", "повел", "повелительное наклонение"),
    ("INvl", "", "Совм", "категория совместности"),
    ("incl", "INvl", "вкл", "говорящий включён в действие"),
    ("excl", "INvl", "выкл", "говорящий не включён в действие"),
    ("VOic", "", "Залог", "категория залога"),
    ("actv", "VOic", "действ", "действительный залог"),
    ("pssv", "VOic", "страд", "страдательный залог"),
    ("Infr", "", "разг", "разговорное"),
    ("Slng", "", "жарг", "жаргонное"),
    ("Arch", "", "арх", "устаревшее"),
    ("Litr", "", "лит", "литературный вариант"),
    ("Erro", "", "опеч", "опечатка"),
    ("Dist", "", "искаж", "искажение"),
    ("Ques", "", "вопр", "вопросительное"),
    ("Dmns", "", "указ", "указательное"),
    ("Prnt", "", "вводн", "вводное слово"),
    ("V-be", "", "*ье", "форма на -ье"),
    ("V-en", "", "*енен", "форма на -енен"),
    ("V-ie", "", "*ие", "форма на -и- (веселие, твердостию)"),
    ("V-bi", "", "*ьи", "форма на -ьи"),
    ("Fimp", "", "*несов", "деепричастие от глагола несовершенного вида"),
    ("Prdx", "", "предк?", "может выступать в роли предикатива"),
    ("Coun", "", "счетн", "счётная форма"),
    ("Coll", "", "собир", "собирательное числительное"),
    ("V-sh", "", "*ши", "деепричастие на -ши"),
    ("Af-p", "", "*с-п", "форма после предлога"),
    ("Inmx", "", "не/одуш?", "может использоваться как одуш. / неодуш."),
    ("Vpre", "", "в_предл", "вариант предлога (со, подо, ...)"),
    ("Anph", "", "Анаф", "анафорическое (местоимение)"),
    ("Init", "", "иниц", "инициал"),
    ("Adjx", "", "прил?", "может выступать в роли прилагательного"),
    ("Hypo", "", "гипот", "гипотетическая форма слова"),
];
