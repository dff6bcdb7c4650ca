mod incomplete_jersey_selections;
mod is_empty;
